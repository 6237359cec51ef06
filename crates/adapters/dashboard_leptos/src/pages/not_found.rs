use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to the device dashboard"</a>
            </p>
        </div>
    }
}
