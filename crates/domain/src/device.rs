//! Device — a fire-alarm sensor unit reported by the backend.
//!
//! Devices are read-only snapshots: the dashboard holds a local copy and
//! never writes back.

use serde::{Deserialize, Deserializer};

use crate::id::DeviceId;
use crate::location::Location;

/// A sensor unit and its last known position and status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Identifier of the ESP32 board driving the unit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub esp_32: String,
    /// Latitude as sent by the backend, not validated.
    #[serde(default, deserialize_with = "raw_coordinate")]
    pub gps_latitude: Option<String>,
    /// Longitude as sent by the backend, not validated.
    #[serde(default, deserialize_with = "raw_coordinate")]
    pub gps_longitude: Option<String>,
    /// `null` and a missing flag both read as inactive.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}

impl Device {
    /// Parse the raw GPS fields into a [`Location`].
    #[must_use]
    pub fn location(&self) -> Location {
        Location::parse(self.gps_latitude.as_deref(), self.gps_longitude.as_deref())
    }
}

/// Coordinates arrive as strings, but some rows carry bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCoordinate {
    Text(String),
    Number(f64),
}

/// Read JSON `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn raw_coordinate<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<WireCoordinate>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        WireCoordinate::Text(text) => text,
        WireCoordinate::Number(number) => number.to_string(),
    }))
}
