use firewatch_app::config::DashboardConfig;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
pub mod config;
pub mod logging;
mod pages;

use pages::{DeviceDashboard, NotFound};

/// Root application component.
///
/// Makes `config` available to every page through Leptos context.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let theme = config.theme.css_variables();
    provide_context(config);

    view! {
        <div class="app" style=theme>
            <header class="app-header">"Device Dashboard"</header>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=DeviceDashboard/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
