//! Place subcommands and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `waymark-core` stays free of clap.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use waymark_core::{
    params::{AddPlace, Id, ShowMarkers},
    CreateResult, DeleteResult, MarkerReconciler, Markers, OperationStatus, PlaceStore, Places,
    ScreenConfig, WaymarkError,
};

use crate::renderer::TerminalRenderer;

/// Place management commands
#[derive(Subcommand)]
pub enum PlaceCommands {
    /// Add a place at a coordinate
    Add(AddPlaceArgs),
    /// List all places in insertion order
    #[command(alias = "ls")]
    List(ListPlacesArgs),
    /// Show one place
    Show(PlaceIdArgs),
    /// Delete a place
    #[command(alias = "rm")]
    Delete(PlaceIdArgs),
}

/// Add a place directly, without the tap dialog
#[derive(Args)]
pub struct AddPlaceArgs {
    /// Display name of the place
    pub name: String,
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// Mark the place as an alert
    #[arg(long)]
    pub alert: bool,
}

impl From<AddPlaceArgs> for AddPlace {
    fn from(val: AddPlaceArgs) -> Self {
        AddPlace {
            name: val.name,
            latitude: val.lat,
            longitude: val.lon,
            is_alert: val.alert,
        }
    }
}

#[derive(Args)]
pub struct ListPlacesArgs {
    /// Print the places as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PlaceIdArgs {
    /// ID of the place
    pub id: u64,
}

impl From<PlaceIdArgs> for Id {
    fn from(val: PlaceIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Runs one-shot commands against the store and prints the result.
pub struct Cli {
    store: PlaceStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlaceStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_place_command(&self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::Add(args) => self.add_place(&args.into()).await,
            PlaceCommands::List(args) => self.list_places(args.json).await,
            PlaceCommands::Show(args) => self.show_place(&args.into()).await,
            PlaceCommands::Delete(args) => self.delete_place(&args.into()).await,
        }
    }

    async fn add_place(&self, params: &AddPlace) -> Result<()> {
        let place = params.to_new_place()?;
        let place = self
            .store
            .insert_place(place)
            .await
            .context("Failed to save place")?;
        self.renderer
            .render(&CreateResult::new(place).to_string())
    }

    pub async fn list_places(&self, json: bool) -> Result<()> {
        let places = self.store.list().await.context("Failed to list places")?;
        if json {
            println!("{}", serde_json::to_string_pretty(&places)?);
            return Ok(());
        }
        self.renderer.render(&Places(places).to_string())
    }

    async fn show_place(&self, params: &Id) -> Result<()> {
        let place = self
            .store
            .get(params.id)
            .await?
            .ok_or(WaymarkError::PlaceNotFound { id: params.id })?;
        self.renderer.render(&place.to_string())
    }

    async fn delete_place(&self, params: &Id) -> Result<()> {
        // Fetch first so the confirmation can name the place
        let Some(place) = self.store.get(params.id).await? else {
            let status = OperationStatus::success(format!(
                "Place {} not found, nothing deleted.",
                params.id
            ));
            return self.renderer.render(&status.to_string());
        };

        self.store
            .delete(&place)
            .await
            .context("Failed to delete place")?;
        self.renderer.render(&DeleteResult::new(place).to_string())
    }

    /// Prints the marker set for the stored places at the given zoom.
    pub async fn show_markers(&self, params: &ShowMarkers) -> Result<()> {
        let config = ScreenConfig::default().with_initial_zoom(params.zoom);
        config.validate()?;

        let mut reconciler = MarkerReconciler::new(config.initial_zoom);
        reconciler.reconcile(&self.store.snapshot(), None);

        self.renderer.render(&format!(
            "# Markers at zoom {}\n\n{}",
            config.initial_zoom,
            Markers(reconciler.annotations())
        ))
    }
}
