//! Configuration embedded from `firewatch.toml` at build time.

use firewatch_app::config::{ConfigError, DashboardConfig};

const EMBEDDED: &str = include_str!("../firewatch.toml");

/// Parse the embedded configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `firewatch.toml` is malformed or invalid.
pub fn load() -> Result<DashboardConfig, ConfigError> {
    DashboardConfig::from_toml(EMBEDDED)
}
