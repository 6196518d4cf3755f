//! Commands accepted by the controller and the snapshots it publishes.

use serde::Serialize;

use crate::{
    interaction::{InteractionState, PointType},
    models::{Annotation, Camera, Coordinate, FavoritePlace, MapStyle, MarkerKey},
};

/// A user gesture or renderer notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenCommand {
    TapMap { latitude: f64, longitude: f64 },
    ChoosePointType(PointType),
    ConfirmName(String),
    CancelNaming,
    Dismiss,
    TapMarker(MarkerKey),
    ZoomIn,
    ZoomOut,
    /// Zoom reported by the renderer after a pinch or scroll
    CameraChanged(f64),
    Recenter,
    ToggleStyle,
    GoToPlace(u64),
    DeletePlace(u64),
}

/// Feedback for the user after a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notice {
    /// The command did not apply in the current state
    Ignored,
    /// A dialog opened or closed
    DialogChanged,
    MarkerName(String),
    Saved(FavoritePlace),
    Deleted { id: u64, removed: bool },
    ZoomChanged(f64),
    Recentered(Coordinate),
    LocationUnavailable,
    StyleChanged(MapStyle),
    WentTo(FavoritePlace),
}

/// Immutable view of the screen for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot {
    pub interaction: InteractionState,
    pub camera: Camera,
    pub places: Vec<FavoritePlace>,
    pub markers: Vec<(MarkerKey, Annotation)>,
    pub last_notice: Option<Notice>,
    pub last_error: Option<String>,
}
