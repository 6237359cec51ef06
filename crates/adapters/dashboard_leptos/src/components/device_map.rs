//! Map for the selected device, rendered through the Google Maps Embed API.

use firewatch_domain::map::MapView;
use leptos::prelude::*;

const EMBED_BASE: &str = "https://www.google.com/maps/embed/v1";

/// Embedded map centered per `map_view`, with a pin when it has a marker.
#[component]
pub fn DeviceMap(
    /// Name of the device shown above the map.
    #[prop(into)]
    name: String,
    map_view: MapView,
    /// Maps Embed API key.
    #[prop(into)]
    api_key: String,
    /// Frame height in pixels.
    height_px: u32,
    /// Invoked when the map is dismissed.
    on_close: Callback<()>,
) -> impl IntoView {
    let src = embed_url(&map_view, &api_key);
    let style = format!("height: {height_px}px;");

    view! {
        <div class="map">
            <div class="map-header">
                <strong>{name}</strong>
                <button on:click=move |_| on_close.run(())>"Close"</button>
            </div>
            <iframe class="map-frame" src=src style=style title="Device location"></iframe>
        </div>
    }
}

/// Build the embed URL: `place` mode drops a pin, `view` mode only centers.
fn embed_url(map_view: &MapView, api_key: &str) -> String {
    let key = encode_query_value(api_key);
    let center = format!("{},{}", map_view.center.lat, map_view.center.lng);
    match map_view.marker {
        Some(marker) => format!(
            "{EMBED_BASE}/place?key={key}&q={},{}&center={center}&zoom={}",
            marker.lat, marker.lng, map_view.zoom
        ),
        None => format!(
            "{EMBED_BASE}/view?key={key}&center={center}&zoom={}",
            map_view.zoom
        ),
    }
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use firewatch_domain::location::GeoPoint;
    use firewatch_domain::map::DEFAULT_CENTER;

    #[test]
    fn should_pin_marker_in_place_mode() {
        let point = GeoPoint {
            lat: 13.75,
            lng: 100.5,
        };
        let map_view = MapView {
            center: point,
            marker: Some(point),
            zoom: 15,
        };
        assert_eq!(
            embed_url(&map_view, "KEY"),
            "https://www.google.com/maps/embed/v1/place?key=KEY&q=13.75,100.5&center=13.75,100.5&zoom=15"
        );
    }

    #[test]
    fn should_only_center_without_marker() {
        let map_view = MapView {
            center: DEFAULT_CENTER,
            marker: None,
            zoom: 15,
        };
        assert_eq!(
            embed_url(&map_view, "KEY"),
            "https://www.google.com/maps/embed/v1/view?key=KEY&center=13.736717,100.523186&zoom=15"
        );
    }

    #[test]
    fn should_encode_api_key() {
        assert_eq!(encode_query_value("a b&c=d+e%"), "a%20b%26c%3Dd%2Be%25");
    }
}
