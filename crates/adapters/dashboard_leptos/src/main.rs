//! Browser entry point — built with trunk for `wasm32-unknown-unknown`.

use firewatch_dashboard::{App, config, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    logging::init(&config.logging.filter);
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "invalid embedded configuration, using defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
