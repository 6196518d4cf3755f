//! Core library for the Waymark favorite-places map.
//!
//! This crate holds everything below the map view: the SQLite-backed place
//! store with its live list subscription, the add-place dialog state
//! machine, the marker reconciler and the screen controller that ties them
//! to a renderer.
//!
//! # Data flow
//!
//! ```text
//! PlaceStore ──observe_all──▶ MapController ──reconcile──▶ MapRenderer
//!     ▲                            │
//!     └──────── insert/delete ─────┘
//! ```
//!
//! Every write goes through the store. The controller never edits its own
//! marker set; it waits for the store to publish the new list and
//! reconciles against it.
//!
//! # Quick Start
//!
//! ```rust
//! use waymark_core::PlaceStoreBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlaceStoreBuilder::new()
//!     .with_database_path(Some("places.db"))
//!     .build()
//!     .await?;
//!
//! let id = store.insert("Home", 52.52, 13.405, false).await?;
//! println!("Saved place {id}");
//!
//! for place in store.list().await? {
//!     println!("{place}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod interaction;
pub mod models;
pub mod params;
pub mod reconciler;
pub mod store;

// Re-export commonly used types
pub use controller::{
    FixedLocation, LocationProvider, MapController, MapRenderer, Notice, ScreenCommand,
    ScreenConfig, ScreenSnapshot,
};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Markers, OperationStatus, Places};
pub use error::{Result, WaymarkError};
pub use interaction::{Interaction, InteractionState, Outcome, PointType};
pub use models::{
    Annotation, Camera, Coordinate, FavoritePlace, IconKind, MapStyle, MarkerCommand, MarkerKey,
    NewPlace, PendingPoint,
};
pub use params::{AddPlace, Id, ShowMarkers};
pub use reconciler::MarkerReconciler;
pub use store::{PlaceStore, PlaceStoreBuilder, PlaceSubscription};
