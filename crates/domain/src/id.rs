//! Device identifier as assigned by the backend.
//!
//! The backend owns identity, so the id is kept as opaque text. It accepts
//! both JSON numbers and strings on the wire.

use std::fmt;

use serde::Deserialize;

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "WireId")]
pub struct DeviceId(String);

/// Shapes the backend may use for an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<WireId> for DeviceId {
    fn from(raw: WireId) -> Self {
        match raw {
            WireId::Unsigned(value) => Self(value.to_string()),
            WireId::Signed(value) => Self(value.to_string()),
            WireId::Text(value) => Self(value),
        }
    }
}

impl DeviceId {
    /// Access the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for DeviceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
