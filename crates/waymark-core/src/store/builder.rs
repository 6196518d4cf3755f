//! Builder for creating and configuring PlaceStore instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::PlaceStore;
use crate::{
    db::Database,
    error::{Result, WaymarkError},
};

/// File name used under the XDG data directory.
pub const DEFAULT_DATABASE_FILE: &str = "favorite_places.db";

/// Builder for creating and configuring PlaceStore instances.
#[derive(Debug, Clone)]
pub struct PlaceStoreBuilder {
    database_path: Option<PathBuf>,
}

impl PlaceStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waymark/favorite_places.db` or
    /// `~/.local/share/waymark/favorite_places.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, creating the schema and loading the initial list.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::FileSystem` if the parent directory cannot be
    /// created, `WaymarkError::Database` if initialization fails
    pub async fn build(self) -> Result<PlaceStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        let db_path_clone = db_path.clone();
        let initial = task::spawn_blocking(move || {
            if let Some(parent) = db_path_clone.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| WaymarkError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
            }

            let db = Database::new(&db_path_clone)?;
            db.list_places()
        })
        .await
        .map_err(WaymarkError::join)??;

        info!(
            "Opened place store at {} with {} places",
            db_path.display(),
            initial.len()
        );
        Ok(PlaceStore::new(db_path, initial))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waymark")
            .place_data_file(DEFAULT_DATABASE_FILE)
            .map_err(|e| WaymarkError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlaceStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
