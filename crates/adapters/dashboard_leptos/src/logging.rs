//! Route `tracing` output to the browser console.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfig};

/// Fallback directive used when the configured filter does not parse.
const FALLBACK_FILTER: &str = "info";

/// Build the filter for `directives` (`RUST_LOG` syntax).
///
/// An unparsable filter falls back to `info`.
#[must_use]
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber: `filter` in front of the console layer.
pub fn init(directives: &str) {
    if tracing_subscriber::registry()
        .with(filter(directives))
        .with(WASMLayer::new(WASMLayerConfig::default()))
        .try_init()
        .is_err()
    {
        leptos::logging::warn!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_configured_directives() {
        assert_eq!(filter("firewatch=debug").to_string(), "firewatch=debug");
    }

    #[test]
    fn should_fall_back_to_info_on_invalid_filter() {
        assert_eq!(filter("firewatch=loud").to_string(), FALLBACK_FILTER);
    }
}
