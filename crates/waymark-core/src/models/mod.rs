//! Domain models for favorite places and their map presentation.
//!
//! Display implementations live in [`crate::display`].

pub mod camera;
pub mod coordinate;
pub mod marker;
pub mod place;

#[cfg(test)]
mod tests;

pub use camera::{Camera, MapStyle};
pub use coordinate::Coordinate;
pub use marker::{icon_size, Annotation, IconKind, MarkerCommand, MarkerKey, ICON_SIZES};
pub use place::{FavoritePlace, NewPlace, PendingPoint};
