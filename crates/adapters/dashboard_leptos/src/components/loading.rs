//! Full-height placeholder shown while the device list is in flight.

use leptos::prelude::*;

const LOADING_TIP: &str = "Loading...";

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-busy="true">
            <div class="loading-indicator">
                <span class="spinner"></span>
            </div>
            <p class="loading-tip">{LOADING_TIP}</p>
        </div>
    }
}
