//! Device table component for displaying a list of devices.

use firewatch_domain::device::Device;
use firewatch_domain::id::DeviceId;
use leptos::prelude::*;

use super::StatusBadge;

/// A table displaying a list of devices, one row per device in server order.
#[component]
pub fn DeviceTable(
    /// The list of devices to display.
    devices: Vec<Device>,
    /// Invoked with the row's id when "View on Map" is clicked.
    on_view_map: Callback<DeviceId>,
) -> impl IntoView {
    if devices.is_empty() {
        view! {
            <p>"No devices found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"ESP32"</th>
                        <th>"GPS Latitude"</th>
                        <th>"GPS Longitude"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {devices.into_iter().map(|device| {
                        view! {
                            <DeviceRow device on_view_map/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the device table.
#[component]
fn DeviceRow(
    /// The device to display.
    device: Device,
    on_view_map: Callback<DeviceId>,
) -> impl IntoView {
    let id = device.id;
    let latitude = device.gps_latitude.unwrap_or_else(|| "\u{2014}".to_string());
    let longitude = device.gps_longitude.unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <tr>
            <td>{device.name}</td>
            <td>{device.esp_32}</td>
            <td>{latitude}</td>
            <td>{longitude}</td>
            <td><StatusBadge active=device.active/></td>
            <td>
                <button on:click=move |_| on_view_map.run(id.clone())>
                    "View on Map"
                </button>
            </td>
        </tr>
    }
}
