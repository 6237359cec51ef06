//! Device dashboard page: summary cards, device table and map panel.

use firewatch_adapter_http_gloo::HttpClient;
use firewatch_app::config::DashboardConfig;
use firewatch_app::dashboard::{Content, Dashboard, MapPanel};
use firewatch_app::services::dashboard_service::DashboardService;
use firewatch_domain::id::DeviceId;
use firewatch_domain::summary::DeviceSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeviceMap, DeviceTable, Loading, StatCard};

/// The single dashboard screen.
///
/// Fetches the device list once when mounted. A response arriving after the
/// page is disposed is dropped.
#[component]
pub fn DeviceDashboard() -> impl IntoView {
    let settings = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .map;
    let dashboard = RwSignal::new(Dashboard::new());

    let service = DashboardService::new(HttpClient::new());
    spawn_local(async move {
        let result = service.fetch().await;
        if dashboard.try_update(|state| state.resolve(result)).is_none() {
            tracing::debug!("dashboard disposed before devices arrived");
        }
    });

    let content = Memo::new(move |_| dashboard.with(|state| state.content().clone()));

    let on_view_map = Callback::new(move |id: DeviceId| {
        dashboard.update(|state| {
            state.open_map(&id);
        });
    });
    let on_close_map = Callback::new(move |()| {
        dashboard.update(Dashboard::close_map);
    });

    let map_panel = move || {
        dashboard.with(|state| match state.map_panel(&settings) {
            MapPanel::Placeholder => view! {
                <p class="map-placeholder">"Select a device to view on the map"</p>
            }
            .into_any(),
            MapPanel::Map { device, view: map_view } => view! {
                <DeviceMap
                    name=device.name.clone()
                    map_view
                    api_key=settings.api_key.clone()
                    height_px=settings.height_px
                    on_close=on_close_map
                />
            }
            .into_any(),
        })
    };

    view! {
        {move || match content.get() {
            Content::Loading => view! { <Loading/> }.into_any(),
            Content::Failed(err) => view! {
                <div class="error-panel">
                    <h2>"Error fetching data"</h2>
                    <p>{err.to_string()}</p>
                </div>
            }
            .into_any(),
            Content::Loaded(devices) => {
                let summary = DeviceSummary::from_devices(&devices);
                view! {
                    <section class="stats">
                        <StatCard label="Total Devices" value=summary.total tone="success"/>
                        <StatCard label="Active Devices" value=summary.active tone="warning"/>
                        <StatCard label="Inactive Devices" value=summary.inactive tone="error"/>
                    </section>
                    <section class="panels">
                        <div class="card">
                            <h3>"Device List"</h3>
                            <DeviceTable devices on_view_map/>
                        </div>
                        <div
                            class="card"
                            class=("map-open", move || dashboard.with(Dashboard::is_map_open))
                        >
                            <h3>"Map View"</h3>
                            {map_panel.clone()}
                        </div>
                    </section>
                }
                .into_any()
            }
        }}
    }
}
