//! Waymark CLI Application
//!
//! Command-line front-end for the Waymark favorite-place map.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waymark_core::{params::ShowMarkers, FixedLocation, PlaceStoreBuilder, ScreenConfig};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        location,
        zoom,
        command,
    } = Args::parse();

    let store = PlaceStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open place store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waymark started");

    match command {
        Some(Place { command }) => {
            Cli::new(store, renderer)
                .handle_place_command(command)
                .await
        }
        Some(Markers) => {
            Cli::new(store, renderer)
                .show_markers(&ShowMarkers { zoom })
                .await
        }
        Some(Session) => {
            let config = ScreenConfig::default().with_initial_zoom(zoom);
            session::run_session(store, renderer, FixedLocation(location), config)
                .await
                .context("Session failed")
        }
        None => Cli::new(store, renderer).list_places(false).await,
    }
}
