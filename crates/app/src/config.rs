//! Configuration loading — TOML embedded into the dashboard at build time.
//!
//! Every field has a sensible default so an empty document is valid. The API
//! base URL is deliberately absent: it is fixed in the HTTP adapter.

use firewatch_domain::location::GeoPoint;
use firewatch_domain::map::{DEFAULT_CENTER, DEFAULT_ZOOM};
use serde::Deserialize;

/// Highest zoom level the map widget accepts.
const MAX_ZOOM: u8 = 21;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Map widget settings.
    pub map: MapSettings,
    /// Color tokens.
    pub theme: ThemeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Map widget settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Center used when a device has no usable coordinates.
    pub default_center: GeoPoint,
    /// Zoom level (0–21).
    pub zoom: u8,
    /// Height of the map frame in pixels.
    pub height_px: u32,
    /// Maps Embed API key.
    pub api_key: String,
}

/// Color tokens applied as CSS custom properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub link: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed, or
    /// [`ConfigError::Validation`] if a value is out of range.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.map.zoom > MAX_ZOOM {
            return Err(ConfigError::Validation(format!(
                "map zoom must be at most {MAX_ZOOM}"
            )));
        }
        if !self.map.default_center.is_valid() {
            return Err(ConfigError::Validation(
                "map default center is out of range".to_string(),
            ));
        }
        if self.map.height_px == 0 {
            return Err(ConfigError::Validation(
                "map height must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ThemeConfig {
    /// Render the tokens as an inline `style` value.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary: {}; --color-link: {}; --color-success: {}; --color-warning: {}; --color-error: {};",
            self.primary, self.link, self.success, self.warning, self.error
        )
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            height_px: 400,
            api_key: "YOUR_GOOGLE_MAPS_API_KEY".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#ff4500".to_string(),
            link: "#ff6347".to_string(),
            success: "#52c41a".to_string(),
            warning: "#faad14".to_string(),
            error: "#f5222d".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "firewatch=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
