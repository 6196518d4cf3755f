//! Map screen controller.
//!
//! [`MapController`] is the single sequential owner of the screen: it turns
//! gestures into [`Interaction`] transitions and store calls, keeps the
//! camera, and forwards marker changes from the [`MarkerReconciler`] to the
//! renderer.
//!
//! ```text
//! ┌──────────────┐   ScreenCommand   ┌───────────────┐  insert/delete  ┌────────────┐
//! │   UI layer   │──────────────────▶│ MapController │────────────────▶│ PlaceStore │
//! │ (renderer,   │◀──────────────────│               │◀────────────────│            │
//! │  dialogs)    │  ScreenSnapshot   └───────┬───────┘  observe_all()  └────────────┘
//! └──────────────┘                           │ MarkerCommand
//!                                            ▼
//!                                      MapRenderer
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use waymark_core::{
//!     controller::{FixedLocation, MapController, MapRenderer, ScreenConfig},
//!     interaction::PointType,
//!     models::{Camera, MapStyle, MarkerCommand},
//!     PlaceStoreBuilder,
//! };
//!
//! struct NullRenderer;
//!
//! impl MapRenderer for NullRenderer {
//!     fn apply(&mut self, _commands: &[MarkerCommand]) {}
//!     fn move_camera(&mut self, _camera: &Camera) {}
//!     fn load_style(&mut self, _style: MapStyle) {}
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(PlaceStoreBuilder::new().build().await?);
//! let mut screen = MapController::new(
//!     store,
//!     NullRenderer,
//!     FixedLocation(None),
//!     ScreenConfig::default(),
//! )?;
//! screen.start();
//!
//! screen.tap_map(40.4, -3.7)?;
//! screen.choose_point_type(PointType::Alert);
//! let saved = screen.confirm_name("Roadworks").await?;
//! assert!(saved.is_some());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};

use crate::{
    error::{Result, WaymarkError},
    interaction::{Interaction, Outcome, PointType},
    models::{Camera, Coordinate, FavoritePlace, MapStyle, MarkerCommand, MarkerKey},
    reconciler::MarkerReconciler,
    store::{PlaceStore, PlaceSubscription},
};

pub mod command;
pub mod config;
pub mod ports;


pub use command::{Notice, ScreenCommand, ScreenSnapshot};
pub use config::ScreenConfig;
pub use ports::{FixedLocation, LocationProvider, MapRenderer};

/// Orchestrates the map screen.
pub struct MapController<R, L> {
    store: Arc<PlaceStore>,
    subscription: PlaceSubscription,
    places: Vec<FavoritePlace>,
    interaction: Interaction,
    reconciler: MarkerReconciler,
    camera: Camera,
    config: ScreenConfig,
    renderer: R,
    location: L,
    last_notice: Option<Notice>,
    last_error: Option<String>,
}

impl<R: MapRenderer, L: LocationProvider> MapController<R, L> {
    /// Creates a controller. Nothing is rendered until [`Self::start`].
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::Configuration` if `config` is invalid.
    pub fn new(
        store: Arc<PlaceStore>,
        renderer: R,
        location: L,
        config: ScreenConfig,
    ) -> Result<Self> {
        config.validate()?;
        let subscription = store.observe_all();

        Ok(Self {
            store,
            subscription,
            places: Vec::new(),
            interaction: Interaction::new(),
            reconciler: MarkerReconciler::new(config.initial_zoom),
            camera: Camera {
                center: None,
                zoom: config.initial_zoom,
                style: config.initial_style,
            },
            config,
            renderer,
            location,
            last_notice: None,
            last_error: None,
        })
    }

    /// Loads the style, centers on the device location when known and
    /// renders the stored places.
    pub fn start(&mut self) {
        self.renderer.load_style(self.camera.style);
        if self.recenter().is_none() {
            self.renderer.move_camera(&self.camera);
        }
        self.sync_places();
        info!(
            "Map screen started with {} places at zoom {}",
            self.places.len(),
            self.camera.zoom
        );
    }

    /// Applies the latest store list if it changed since the last sync.
    pub fn sync_places(&mut self) {
        if self.subscription.has_changed() {
            let places = self.subscription.latest();
            self.apply_places(places);
        }
    }

    /// Replaces the known place list and re-renders the difference.
    fn apply_places(&mut self, places: Vec<FavoritePlace>) {
        self.places = places;
        self.render_markers();
    }

    fn render_markers(&mut self) {
        let pending = self.interaction.pending();
        let commands = self.reconciler.reconcile(&self.places, pending.as_ref());
        self.emit(&commands);
    }

    fn emit(&mut self, commands: &[MarkerCommand]) {
        if !commands.is_empty() {
            self.renderer.apply(commands);
        }
    }

    /// A tap on empty map. Opens the point type dialog when idle.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::InvalidInput` for an out-of-range coordinate.
    pub fn tap_map(&mut self, latitude: f64, longitude: f64) -> Result<Outcome> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        Ok(self.interaction.tap(coordinate))
    }

    /// Picks normal or alert in the point type dialog and opens naming.
    pub fn choose_point_type(&mut self, point_type: PointType) -> Outcome {
        let outcome = self.interaction.choose(point_type);
        if outcome == Outcome::Moved {
            self.render_markers();
        }
        outcome
    }

    /// Confirms the naming dialog and stores the place.
    ///
    /// Returns `Ok(None)` when no naming dialog was open.
    ///
    /// # Errors
    ///
    /// An empty name leaves the dialog open. If the insert itself fails the
    /// dialog is reopened with the same point and the storage error is
    /// returned.
    pub async fn confirm_name(&mut self, name: &str) -> Result<Option<FavoritePlace>> {
        let pending = self.interaction.pending();
        let place = match self.interaction.confirm(name)? {
            Outcome::Persist(place) => place,
            Outcome::Ignored | Outcome::Moved => return Ok(None),
        };

        match self.store.insert_place(place).await {
            Ok(created) => {
                // Drops the pending marker and adds the stored one in one pass
                let places = self.subscription.latest();
                self.apply_places(places);
                Ok(Some(created))
            }
            Err(e) => {
                warn!("Failed to save place, reopening naming dialog: {e}");
                if let Some(pending) = pending {
                    self.interaction.reopen(pending);
                }
                self.render_markers();
                Err(e)
            }
        }
    }

    /// Closes the naming dialog without saving.
    pub fn cancel_naming(&mut self) -> Outcome {
        let outcome = self.interaction.cancel();
        if outcome == Outcome::Moved {
            self.render_markers();
        }
        outcome
    }

    /// Closes any open dialog.
    pub fn dismiss(&mut self) -> Outcome {
        let outcome = self.interaction.dismiss();
        if outcome == Outcome::Moved {
            self.render_markers();
        }
        outcome
    }

    /// Name of a tapped marker, for a short notification.
    pub fn tap_marker(&self, key: MarkerKey) -> Option<String> {
        self.reconciler.name_of(key).map(String::from)
    }

    pub fn zoom_in(&mut self) -> f64 {
        let zoom = self.camera.zoom + self.config.zoom_step;
        self.set_zoom(zoom, true)
    }

    pub fn zoom_out(&mut self) -> f64 {
        let zoom = self.camera.zoom - self.config.zoom_step;
        self.set_zoom(zoom, true)
    }

    /// Zoom reported by the renderer. The camera is not moved back.
    pub fn camera_changed(&mut self, zoom: f64) -> f64 {
        self.set_zoom(zoom, false)
    }

    fn set_zoom(&mut self, zoom: f64, move_camera: bool) -> f64 {
        if !zoom.is_finite() {
            debug!("Ignoring non-finite zoom {zoom}");
            return self.camera.zoom;
        }

        let zoom = self.config.clamp_zoom(zoom);
        if zoom == self.camera.zoom {
            return zoom;
        }

        self.camera.zoom = zoom;
        if move_camera {
            self.renderer.move_camera(&self.camera);
        }
        let commands = self.reconciler.set_zoom(zoom);
        self.emit(&commands);
        zoom
    }

    /// Centers the camera on the device location. Returns `None`, leaving
    /// the camera untouched, when no location is available.
    pub fn recenter(&mut self) -> Option<Coordinate> {
        let Some(center) = self.location.last_known_location() else {
            debug!("Location unavailable, camera not recentered");
            return None;
        };

        self.camera.center = Some(center);
        self.renderer.move_camera(&self.camera);
        Some(center)
    }

    /// Switches between the streets and satellite styles.
    pub fn toggle_style(&mut self) -> MapStyle {
        self.camera.style = self.camera.style.toggled();
        self.renderer.load_style(self.camera.style);
        self.camera.style
    }

    /// Centers the camera on a stored place at the current zoom.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::PlaceNotFound` if the place is not in the
    /// current list.
    pub fn go_to_place(&mut self, id: u64) -> Result<FavoritePlace> {
        let place = self
            .places
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(WaymarkError::PlaceNotFound { id })?;

        self.camera.center = Some(place.coordinate);
        self.renderer.move_camera(&self.camera);
        Ok(place)
    }

    /// Deletes a stored place. Deleting an absent place is not an error.
    pub async fn delete_place(&mut self, id: u64) -> Result<bool> {
        let removed = self.store.delete_by_id(id).await?;
        self.sync_places();
        Ok(removed)
    }

    /// Executes one command and returns the feedback to show.
    pub async fn dispatch(&mut self, command: ScreenCommand) -> Result<Notice> {
        let notice = match command {
            ScreenCommand::TapMap {
                latitude,
                longitude,
            } => dialog_notice(self.tap_map(latitude, longitude)?),
            ScreenCommand::ChoosePointType(point_type) => {
                dialog_notice(self.choose_point_type(point_type))
            }
            ScreenCommand::ConfirmName(name) => match self.confirm_name(&name).await? {
                Some(place) => Notice::Saved(place),
                None => Notice::Ignored,
            },
            ScreenCommand::CancelNaming => dialog_notice(self.cancel_naming()),
            ScreenCommand::Dismiss => dialog_notice(self.dismiss()),
            ScreenCommand::TapMarker(key) => match self.tap_marker(key) {
                Some(name) => Notice::MarkerName(name),
                None => Notice::Ignored,
            },
            ScreenCommand::ZoomIn => Notice::ZoomChanged(self.zoom_in()),
            ScreenCommand::ZoomOut => Notice::ZoomChanged(self.zoom_out()),
            ScreenCommand::CameraChanged(zoom) => Notice::ZoomChanged(self.camera_changed(zoom)),
            ScreenCommand::Recenter => match self.recenter() {
                Some(center) => Notice::Recentered(center),
                None => Notice::LocationUnavailable,
            },
            ScreenCommand::ToggleStyle => Notice::StyleChanged(self.toggle_style()),
            ScreenCommand::GoToPlace(id) => Notice::WentTo(self.go_to_place(id)?),
            ScreenCommand::DeletePlace(id) => Notice::Deleted {
                id,
                removed: self.delete_place(id).await?,
            },
        };
        Ok(notice)
    }

    /// Immutable view of the current screen state.
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            interaction: self.interaction.state(),
            camera: self.camera,
            places: self.places.clone(),
            markers: self.reconciler.annotations(),
            last_notice: self.last_notice.clone(),
            last_error: self.last_error.clone(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn places(&self) -> &[FavoritePlace] {
        &self.places
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs the screen until the command channel closes.
    ///
    /// Commands and store updates are handled one at a time on this task.
    /// After each step the new [`ScreenSnapshot`] is published; command
    /// errors are logged and reported through `last_error`.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<ScreenCommand>,
        snapshots: watch::Sender<ScreenSnapshot>,
    ) {
        self.start();
        snapshots.send_replace(self.snapshot());

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match self.dispatch(command).await {
                        Ok(notice) => {
                            self.last_notice = Some(notice);
                            self.last_error = None;
                        }
                        Err(e) => {
                            warn!("Screen command failed: {e}");
                            self.last_error = Some(e.to_string());
                        }
                    }
                }
                places = self.subscription.next() => {
                    let Some(places) = places else {
                        break;
                    };
                    self.apply_places(places);
                }
            }
            snapshots.send_replace(self.snapshot());
        }

        info!("Map screen stopped");
    }
}

fn dialog_notice(outcome: Outcome) -> Notice {
    match outcome {
        Outcome::Ignored => Notice::Ignored,
        Outcome::Moved | Outcome::Persist(_) => Notice::DialogChanged,
    }
}
