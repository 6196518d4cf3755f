//! Geographic coordinate with range validation.

use serde::Serialize;

use crate::error::{Result, WaymarkError};

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A WGS84 point. Both components are finite and within range; the only way
/// to obtain one is through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting out-of-range or non-finite values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waymark_core::models::Coordinate;
    ///
    /// let home = Coordinate::new(10.0, 20.0).unwrap();
    /// assert_eq!(home.latitude(), 10.0);
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_range("latitude", latitude, LATITUDE_RANGE)?;
        check_range("longitude", longitude, LONGITUDE_RANGE)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() {
        return Err(WaymarkError::invalid_input(field).with_reason("must be a finite number"));
    }
    if value < min || value > max {
        return Err(WaymarkError::invalid_input(field)
            .with_reason(format!("{value} is outside [{min}, {max}]")));
    }
    Ok(())
}
