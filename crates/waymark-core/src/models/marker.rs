//! Annotation types handed to the map renderer.

use std::fmt;

use serde::Serialize;

use super::Coordinate;

/// Icon sizes for the four zoom bands, smallest first.
pub const ICON_SIZES: [f64; 4] = [0.2, 0.35, 0.55, 0.8];

/// Maps a zoom level to a marker icon scale.
///
/// Bands are `[.., 5)`, `[5, 10)`, `[10, 15)` and `[15, ..]`.
///
/// ```rust
/// use waymark_core::models::icon_size;
///
/// assert_eq!(icon_size(4.99), 0.2);
/// assert_eq!(icon_size(5.0), 0.35);
/// assert_eq!(icon_size(12.0), 0.55);
/// assert_eq!(icon_size(15.0), 0.8);
/// ```
pub fn icon_size(zoom: f64) -> f64 {
    if zoom < 5.0 {
        ICON_SIZES[0]
    } else if zoom < 10.0 {
        ICON_SIZES[1]
    } else if zoom < 15.0 {
        ICON_SIZES[2]
    } else {
        ICON_SIZES[3]
    }
}

/// Which icon image a marker uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Normal,
    Alert,
}

impl IconKind {
    pub fn for_alert(is_alert: bool) -> Self {
        if is_alert {
            IconKind::Alert
        } else {
            IconKind::Normal
        }
    }

    /// Image id registered with the renderer style.
    pub fn image_id(&self) -> &'static str {
        match self {
            IconKind::Normal => "red_marker",
            IconKind::Alert => "alert_marker",
        }
    }
}

/// Identity of a rendered marker.
///
/// Persisted places are keyed by id; at most one pending marker exists, for
/// the point currently being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MarkerKey {
    Place(u64),
    Pending,
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKey::Place(id) => write!(f, "place:{id}"),
            MarkerKey::Pending => write!(f, "pending"),
        }
    }
}

/// Everything the renderer needs to draw one marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Annotation {
    pub coordinate: Coordinate,
    pub kind: IconKind,
    pub size: f64,
}

/// A single change to the rendered marker set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MarkerCommand {
    Create { key: MarkerKey, annotation: Annotation },
    Resize { key: MarkerKey, size: f64 },
    Destroy { key: MarkerKey },
}

impl MarkerCommand {
    pub fn key(&self) -> MarkerKey {
        match self {
            MarkerCommand::Create { key, .. }
            | MarkerCommand::Resize { key, .. }
            | MarkerCommand::Destroy { key } => *key,
        }
    }
}
