//! Camera position and map style.

use serde::Serialize;

use super::Coordinate;

/// Base map style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Streets,
    Satellite,
}

impl MapStyle {
    pub fn uri(&self) -> &'static str {
        match self {
            MapStyle::Streets => "mapbox://styles/mapbox/streets-v12",
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-v9",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            MapStyle::Streets => MapStyle::Satellite,
            MapStyle::Satellite => MapStyle::Streets,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Streets => "streets",
            MapStyle::Satellite => "satellite",
        }
    }
}

/// Where the map is looking. `center` stays `None` until a location or a
/// place has been centered on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub center: Option<Coordinate>,
    pub zoom: f64,
    pub style: MapStyle,
}
