//! Screen configuration.

use crate::{
    error::{Result, WaymarkError},
    models::MapStyle,
};

/// Zoom used when the screen opens.
pub const DEFAULT_ZOOM: f64 = 12.0;
/// Lowest zoom the zoom-out button reaches.
pub const MIN_ZOOM: f64 = 3.0;
/// Highest zoom the zoom-in button reaches.
pub const MAX_ZOOM: f64 = 22.0;

/// Camera limits and initial state for a [`super::MapController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom delta applied by the zoom buttons
    pub zoom_step: f64,
    pub initial_style: MapStyle,
}

impl ScreenConfig {
    /// Overrides the initial zoom.
    pub fn with_initial_zoom(mut self, zoom: Option<f64>) -> Self {
        if let Some(zoom) = zoom {
            self.initial_zoom = zoom;
        }
        self
    }

    /// Overrides the initial style.
    pub fn with_style(mut self, style: MapStyle) -> Self {
        self.initial_style = style;
        self
    }

    /// Checks that the zoom limits are usable.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::Configuration` for non-finite values, an empty
    /// zoom range, a non-positive step or an initial zoom outside the range.
    pub fn validate(&self) -> Result<()> {
        let values = [self.initial_zoom, self.min_zoom, self.max_zoom, self.zoom_step];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(config_error("zoom values must be finite"));
        }
        if self.min_zoom > self.max_zoom {
            return Err(config_error(format!(
                "min zoom {} is above max zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(config_error("zoom step must be positive"));
        }
        if self.initial_zoom < self.min_zoom || self.initial_zoom > self.max_zoom {
            return Err(config_error(format!(
                "initial zoom {} is outside [{}, {}]",
                self.initial_zoom, self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    /// Clamps a zoom into the configured range.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: 1.0,
            initial_style: MapStyle::default(),
        }
    }
}

fn config_error(message: impl Into<String>) -> WaymarkError {
    WaymarkError::Configuration {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScreenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_zoom, 12.0);
        assert_eq!(config.initial_style, MapStyle::Streets);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let inverted = ScreenConfig {
            min_zoom: 10.0,
            max_zoom: 5.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let outside = ScreenConfig::default().with_initial_zoom(Some(30.0));
        assert!(outside.validate().is_err());

        let nan = ScreenConfig::default().with_initial_zoom(Some(f64::NAN));
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_clamp_zoom() {
        let config = ScreenConfig::default();
        assert_eq!(config.clamp_zoom(1.0), 3.0);
        assert_eq!(config.clamp_zoom(25.0), 22.0);
        assert_eq!(config.clamp_zoom(8.5), 8.5);
    }
}
