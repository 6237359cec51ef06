//! Map view — where to center the map and where to drop the pin.

use crate::location::{GeoPoint, Location};

/// Center used when a device has no usable coordinates (Bangkok).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 13.736_717,
    lng: 100.523_186,
};

/// Street-level zoom used for a single device.
pub const DEFAULT_ZOOM: u8 = 15;

/// What the map widget should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    /// Pin position. `None` when the coordinates did not parse.
    pub marker: Option<GeoPoint>,
    pub zoom: u8,
}

impl MapView {
    /// Build the view for a parsed location.
    ///
    /// A valid location centers the map and places the pin on it. An invalid
    /// one centers on `fallback` and shows no pin.
    #[must_use]
    pub fn for_location(location: Location, fallback: GeoPoint, zoom: u8) -> Self {
        let marker = location.point();
        Self {
            center: marker.unwrap_or(fallback),
            marker,
            zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(lat: Option<&str>, lng: Option<&str>) -> MapView {
        MapView::for_location(Location::parse(lat, lng), DEFAULT_CENTER, DEFAULT_ZOOM)
    }

    #[test]
    fn should_center_and_pin_on_valid_coordinates() {
        let view = view_at(Some("13.75"), Some("100.50"));
        let expected = GeoPoint {
            lat: 13.75,
            lng: 100.50,
        };
        assert_eq!(view.center, expected);
        assert_eq!(view.marker, Some(expected));
        assert_eq!(view.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn should_fall_back_to_default_center_when_missing() {
        let view = view_at(None, None);
        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.marker, None);
    }

    #[test]
    fn should_fall_back_to_default_center_when_unparsable() {
        let view = view_at(Some("n/a"), Some("100.5"));
        assert_eq!(view.center.lat, 13.736_717);
        assert_eq!(view.center.lng, 100.523_186);
        assert!(view.marker.is_none());
    }

    #[test]
    fn should_use_given_fallback_and_zoom() {
        let fallback = GeoPoint { lat: 1.0, lng: 2.0 };
        let view = MapView::for_location(Location::Invalid, fallback, 10);
        assert_eq!(view.center, fallback);
        assert_eq!(view.zoom, 10);
    }
}
