//! Durable favorite-place store with a reactive read stream.
//!
//! [`PlaceStore`] owns the `favorites` table. Every mutation runs on a
//! blocking task, commits, re-reads the full table and only then publishes
//! the new list, so subscribers never see a state that is not on disk.
//!
//! ```text
//! insert/delete ──▶ write lock ──▶ spawn_blocking(commit + reload) ──▶ publish
//!                                                                        │
//!                         observe_all() ◀── watch channel ◀──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use waymark_core::PlaceStoreBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlaceStoreBuilder::new()
//!     .with_database_path(Some("favorites.db"))
//!     .build()
//!     .await?;
//!
//! let mut places = store.observe_all();
//! let id = store.insert("Home", 10.0, 20.0, false).await?;
//! let latest = places.next().await.unwrap_or_default();
//! assert!(latest.iter().any(|p| p.id == id));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use tokio::{
    sync::{watch, Mutex},
    task,
};

use crate::{
    db::Database,
    error::{Result, WaymarkError},
    models::{FavoritePlace, NewPlace},
};

pub mod builder;
pub mod subscription;


pub use builder::PlaceStoreBuilder;
pub use subscription::PlaceSubscription;

/// Persistent set of favorite places.
pub struct PlaceStore {
    db_path: PathBuf,
    write_lock: Mutex<()>,
    snapshot: watch::Sender<Vec<FavoritePlace>>,
}

impl PlaceStore {
    /// Creates a store over an initialized database and its current rows.
    pub(crate) fn new(db_path: PathBuf, initial: Vec<FavoritePlace>) -> Self {
        let (snapshot, _) = watch::channel(initial);
        Self {
            db_path,
            write_lock: Mutex::new(()),
            snapshot,
        }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Validates and inserts a place, returning its new id.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::InvalidInput` for an empty name or an
    /// out-of-range coordinate; nothing is written in that case.
    pub async fn insert(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
        is_alert: bool,
    ) -> Result<u64> {
        let place = NewPlace::new(name, latitude, longitude, is_alert)?;
        Ok(self.insert_place(place).await?.id)
    }

    /// Inserts an already validated place and returns the stored record.
    pub async fn insert_place(&self, place: NewPlace) -> Result<FavoritePlace> {
        let _guard = self.write_lock.lock().await;
        let db_path = self.db_path.clone();

        let (created, places) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let created = db.insert_place(&place)?;
            let places = db.list_places()?;
            Ok::<_, WaymarkError>((created, places))
        })
        .await
        .map_err(WaymarkError::join)??;

        debug!(
            "Inserted place {} '{}' (alert: {})",
            created.id, created.name, created.is_alert
        );
        self.publish(places);
        Ok(created)
    }

    /// Deletes the given place. Deleting a place that is already gone is not
    /// an error; the return value tells whether a row was removed.
    pub async fn delete(&self, place: &FavoritePlace) -> Result<bool> {
        self.delete_by_id(place.id).await
    }

    /// Deletes a place by id. See [`PlaceStore::delete`].
    pub async fn delete_by_id(&self, id: u64) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let db_path = self.db_path.clone();

        let (removed, places) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let removed = db.delete_place(id)?;
            let places = db.list_places()?;
            Ok::<_, WaymarkError>((removed, places))
        })
        .await
        .map_err(WaymarkError::join)??;

        if removed {
            debug!("Deleted place {id}");
        } else {
            debug!("Place {id} already absent, nothing deleted");
        }
        self.publish(places);
        Ok(removed)
    }

    /// Retrieves a single place from storage.
    pub async fn get(&self, id: u64) -> Result<Option<FavoritePlace>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_place(id)
        })
        .await
        .map_err(WaymarkError::join)?
    }

    /// Reads every place from storage, ordered by id.
    pub async fn list(&self) -> Result<Vec<FavoritePlace>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_places()
        })
        .await
        .map_err(WaymarkError::join)?
    }

    /// The most recently published list, without touching storage.
    pub fn snapshot(&self) -> Vec<FavoritePlace> {
        self.snapshot.borrow().clone()
    }

    /// Subscribes to the place list. The first call to
    /// [`PlaceSubscription::next`] yields the current snapshot immediately.
    pub fn observe_all(&self) -> PlaceSubscription {
        PlaceSubscription::new(self.snapshot.subscribe())
    }

    fn publish(&self, places: Vec<FavoritePlace>) {
        debug!("Publishing {} places", places.len());
        self.snapshot.send_replace(places);
    }
}
