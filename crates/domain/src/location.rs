//! Geographic coordinates and the result of parsing them from raw text.

use serde::Deserialize;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Build a point, returning `None` when either axis is non-finite or
    /// outside `[-90, 90]` / `[-180, 180]`.
    #[must_use]
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let point = Self { lat, lng };
        point.is_valid().then_some(point)
    }

    /// Whether both axes are finite and within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Outcome of parsing a device's raw latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// Both axes parsed to an in-range point.
    Valid(GeoPoint),
    /// At least one axis is missing, non-numeric, or out of range.
    Invalid,
}

impl Location {
    /// Parse raw coordinate text. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(lat: Option<&str>, lng: Option<&str>) -> Self {
        match (parse_axis(lat), parse_axis(lng)) {
            (Some(lat), Some(lng)) => {
                GeoPoint::checked(lat, lng).map_or(Self::Invalid, Self::Valid)
            }
            _ => Self::Invalid,
        }
    }

    /// The parsed point, if any.
    #[must_use]
    pub fn point(self) -> Option<GeoPoint> {
        match self {
            Self::Valid(point) => Some(point),
            Self::Invalid => None,
        }
    }
}

fn parse_axis(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok()
}
