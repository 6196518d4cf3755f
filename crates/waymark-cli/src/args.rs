use std::path::PathBuf;

use clap::{Parser, Subcommand};
use waymark_core::Coordinate;

use crate::cli::PlaceCommands;

/// Favorite places on a map, from the terminal
///
/// Waymark stores named map points, each either a normal place or an alert.
/// The `session` command drives the same map screen a graphical front-end
/// would, printing every marker the screen draws.
#[derive(Parser)]
#[command(version, about, name = "wm")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waymark/favorite_places.db
    #[arg(long, global = true, env = "WAYMARK_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Device location as "lat,lon", used to center the map
    #[arg(long, global = true, env = "WAYMARK_LOCATION", value_parser = parse_location)]
    pub location: Option<Coordinate>,

    /// Map zoom level (3 to 22)
    #[arg(long, global = true)]
    pub zoom: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waymark CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage favorite places
    #[command(alias = "p")]
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
    /// Print the markers the map would draw for the stored places
    #[command(alias = "m")]
    Markers,
    /// Drive the map screen from stdin, one command per line
    Session,
}

/// Parses a "lat,lon" pair into a validated coordinate.
fn parse_location(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got \"{value}\""))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude: {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude: {e}"))?;
    Coordinate::new(lat, lon).map_err(|e| e.to_string())
}
