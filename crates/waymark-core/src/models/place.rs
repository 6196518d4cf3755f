//! Favorite place records and the requests that create them.

use serde::Serialize;

use super::Coordinate;
use crate::error::{Result, WaymarkError};

/// A persisted favorite place.
///
/// Places are created and deleted, never updated. The `id` is assigned by
/// the store and is the only identity that survives restarts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoritePlace {
    /// Surrogate key assigned on insert
    pub id: u64,

    /// User-chosen display name, never empty
    pub name: String,

    #[serde(flatten)]
    pub coordinate: Coordinate,

    /// Alert places render with the alert icon
    pub is_alert: bool,
}

/// A validated request to create a [`FavoritePlace`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub name: String,
    pub coordinate: Coordinate,
    pub is_alert: bool,
}

impl NewPlace {
    /// Validates raw input. The name is trimmed and must not be empty.
    pub fn new(name: &str, latitude: f64, longitude: f64, is_alert: bool) -> Result<Self> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        Self::at(name, coordinate, is_alert)
    }

    /// Builds a request for an already validated coordinate.
    pub fn at(name: &str, coordinate: Coordinate, is_alert: bool) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WaymarkError::invalid_input("name").with_reason("must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            coordinate,
            is_alert,
        })
    }
}

/// A tapped point waiting for a name. Lives only while the naming dialog is
/// open and is never written to storage directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPoint {
    pub coordinate: Coordinate,
    pub is_alert: bool,
}
