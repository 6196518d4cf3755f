//! Collaborators the controller talks to but does not own.

use crate::models::{Camera, Coordinate, MapStyle, MarkerCommand};

/// Receives drawing instructions. Implementations own the actual
/// annotations; the controller never reads them back.
pub trait MapRenderer {
    /// Applies an ordered batch of marker changes.
    fn apply(&mut self, commands: &[MarkerCommand]);

    /// Moves the camera to the given center and zoom.
    fn move_camera(&mut self, camera: &Camera);

    /// Switches the base map style.
    fn load_style(&mut self, style: MapStyle);
}

/// Source of the device position.
pub trait LocationProvider {
    /// Best known position, or `None` when unavailable.
    fn last_known_location(&self) -> Option<Coordinate>;
}

/// A provider that always reports the same position (or none).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(pub Option<Coordinate>);

impl LocationProvider for FixedLocation {
    fn last_known_location(&self) -> Option<Coordinate> {
        self.0
    }
}
