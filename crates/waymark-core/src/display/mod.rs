//! Markdown formatting for places, markers and operation results.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; collections
//! and operation outcomes get newtype wrappers so the CLI can print them
//! without knowing their layout.
//!
//! - [`collections`]: `Places`, `Markers`
//! - [`results`]: `CreateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//!
//! ```rust
//! use waymark_core::{
//!     display::CreateResult,
//!     models::{Coordinate, FavoritePlace},
//! };
//!
//! let place = FavoritePlace {
//!     id: 1,
//!     name: "Home".to_string(),
//!     coordinate: Coordinate::new(10.0, 20.0).unwrap(),
//!     is_alert: false,
//! };
//!
//! let output = format!("{}", CreateResult::new(place));
//! assert!(output.contains("Saved place with ID: 1"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Markers, Places};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
