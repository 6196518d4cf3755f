#[cfg(test)]
mod model_tests {
    use crate::models::{
        icon_size, Coordinate, IconKind, MapStyle, MarkerKey, NewPlace, ICON_SIZES,
    };

    #[test]
    fn test_coordinate_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.01), (0.0, -200.0)] {
            let err = Coordinate::new(lat, lon).unwrap_err();
            assert!(err.is_validation(), "({lat}, {lon}) should be rejected");
        }
    }

    #[test]
    fn test_coordinate_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_place_trims_name() {
        let place = NewPlace::new("  Home ", 10.0, 20.0, false).expect("valid place");
        assert_eq!(place.name, "Home");
        assert_eq!(place.coordinate.latitude(), 10.0);
        assert_eq!(place.coordinate.longitude(), 20.0);
        assert!(!place.is_alert);
    }

    #[test]
    fn test_new_place_rejects_blank_name() {
        let err = NewPlace::new("   ", 10.0, 20.0, false).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn test_new_place_rejects_bad_coordinate_before_name() {
        let err = NewPlace::new("", 100.0, 20.0, false).unwrap_err();
        assert!(err.to_string().contains("'latitude'"));
    }

    #[test]
    fn test_icon_size_band_edges() {
        assert_eq!(icon_size(0.0), 0.2);
        assert_eq!(icon_size(4.999), 0.2);
        assert_eq!(icon_size(5.0), 0.35);
        assert_eq!(icon_size(9.999), 0.35);
        assert_eq!(icon_size(10.0), 0.55);
        assert_eq!(icon_size(14.999), 0.55);
        assert_eq!(icon_size(15.0), 0.8);
        assert_eq!(icon_size(22.0), 0.8);
    }

    #[test]
    fn test_icon_size_is_monotonic() {
        let mut previous = icon_size(-1.0);
        let mut zoom = -1.0;
        while zoom <= 25.0 {
            let size = icon_size(zoom);
            assert!(ICON_SIZES.contains(&size));
            assert!(size >= previous, "icon size decreased at zoom {zoom}");
            previous = size;
            zoom += 0.25;
        }
    }

    #[test]
    fn test_icon_kind_image_ids() {
        assert_eq!(IconKind::for_alert(true), IconKind::Alert);
        assert_eq!(IconKind::for_alert(false).image_id(), "red_marker");
        assert_eq!(IconKind::Alert.image_id(), "alert_marker");
    }

    #[test]
    fn test_map_style_toggle() {
        assert_eq!(MapStyle::default(), MapStyle::Streets);
        assert_eq!(MapStyle::Streets.toggled(), MapStyle::Satellite);
        assert_eq!(MapStyle::Satellite.toggled().toggled(), MapStyle::Satellite);
    }

    #[test]
    fn test_marker_key_ordering_puts_places_first() {
        let mut keys = vec![MarkerKey::Pending, MarkerKey::Place(3), MarkerKey::Place(1)];
        keys.sort();
        assert_eq!(
            keys,
            vec![MarkerKey::Place(1), MarkerKey::Place(3), MarkerKey::Pending]
        );
    }
}
