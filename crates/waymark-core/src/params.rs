//! Parameter structures shared by the interfaces.
//!
//! Interface layers wrap these with their own derives (clap on the CLI) and
//! convert into them with `.into()`. The core structures keep only serde so
//! they can also be read from JSON.

use serde::{Deserialize, Serialize};

use crate::{error::Result, models::NewPlace};

/// Generic parameters for operations requiring just an ID.
///
/// Used by show, delete and go-to-place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the place to operate on
    pub id: u64,
}

/// Parameters for adding a place directly, without the tap dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlace {
    /// Display name of the place (required)
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Whether the place uses the alert icon
    #[serde(default)]
    pub is_alert: bool,
}

impl AddPlace {
    /// Validates the raw values into an insert request.
    pub fn to_new_place(&self) -> Result<NewPlace> {
        NewPlace::new(&self.name, self.latitude, self.longitude, self.is_alert)
    }
}

/// Parameters for printing the marker set the map would render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowMarkers {
    /// Zoom level to size the icons for; defaults to the screen's initial zoom
    pub zoom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_place_validates() {
        let params = AddPlace {
            name: " Home ".to_string(),
            latitude: 51.5,
            longitude: -0.12,
            is_alert: true,
        };
        let place = params.to_new_place().unwrap();
        assert_eq!(place.name, "Home");
        assert!(place.is_alert);

        let bad = AddPlace {
            latitude: 95.0,
            ..params
        };
        assert!(bad.to_new_place().unwrap_err().is_validation());
    }

    #[test]
    fn test_add_place_from_json() {
        let params: AddPlace =
            serde_json::from_str(r#"{"name":"Cafe","latitude":1.0,"longitude":2.0}"#).unwrap();
        assert!(!params.is_alert);
    }
}
