//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Annotation, FavoritePlace, MarkerKey};

/// Newtype wrapper for displaying a list of places.
///
/// ```rust
/// use waymark_core::display::Places;
///
/// assert_eq!(Places(vec![]).to_string(), "No favorite places yet.\n");
/// ```
pub struct Places(pub Vec<FavoritePlace>);

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No favorite places yet.");
        }

        for (index, place) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for the rendered marker set.
pub struct Markers(pub Vec<(MarkerKey, Annotation)>);

impl fmt::Display for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No markers on the map.");
        }

        for (key, annotation) in &self.0 {
            writeln!(f, "- {key}: {annotation}")?;
        }
        Ok(())
    }
}
