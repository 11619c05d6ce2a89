use dioxus::prelude::*;

use crate::templates::js_string;

/// A single pinned location plus the tile service to draw it on.
#[derive(Clone, PartialEq)]
pub struct MapView {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub tile_url: Option<String>,
}

/// Leaflet marker with an info popup. Without a tile service, or without
/// JavaScript, the coordinates are shown as text instead.
#[allow(non_snake_case)]
#[component]
pub fn ReportMap(map: MapView) -> Element {
    match map.tile_url.as_deref() {
        Some(tile_url) => {
            let map_js = map_script(&map, tile_url);
            rsx! {
                div { id: "report-map", class: "h-64 w-full rounded-md border border-gray-200" }
                noscript {
                    CoordinateFallback { map: map.clone() }
                }
                script { src: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" }
                script { dangerous_inner_html: "{map_js}" }
            }
        }
        None => rsx! {
            CoordinateFallback { map: map.clone() }
        },
    }
}

#[allow(non_snake_case)]
#[component]
fn CoordinateFallback(map: MapView) -> Element {
    let lat = format!("{:.6}", map.lat);
    let lng = format!("{:.6}", map.lng);
    rsx! {
        div { class: "map-fallback bg-gray-100 p-4 rounded-md text-sm text-gray-700",
            p { class: "font-medium mb-2", "Location coordinates:" }
            p { "Latitude: {lat}" }
            p { "Longitude: {lng}" }
            p { "Address: {map.address}" }
        }
    }
}

/// Inline Leaflet bootstrap. Every interpolated string goes through
/// `js_string`; the popup is built with `textContent`.
pub fn map_script(map: &MapView, tile_url: &str) -> String {
    let lat = map.lat;
    let lng = map.lng;
    let tile = js_string(tile_url);
    let address = js_string(&map.address);
    let coords = js_string(&format!("Lat: {:.6}, Lng: {:.6}", map.lat, map.lng));
    format!(
        r#"(function() {{
    var map = L.map('report-map').setView([{lat}, {lng}], 15);
    L.tileLayer({tile}, {{
        attribution: '&copy; OpenStreetMap contributors',
        maxZoom: 19,
    }}).addTo(map);
    var popup = document.createElement('div');
    var heading = document.createElement('strong');
    heading.textContent = 'Incident Location';
    popup.appendChild(heading);
    var address = document.createElement('p');
    address.textContent = {address};
    popup.appendChild(address);
    var coords = document.createElement('p');
    coords.textContent = {coords};
    popup.appendChild(coords);
    L.marker([{lat}, {lng}]).addTo(map).bindPopup(popup).openPopup();
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> MapView {
        MapView {
            lat: 40.7128,
            lng: -74.006,
            address: "123 Main St </script>".to_string(),
            tile_url: Some("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()),
        }
    }

    #[test]
    fn script_centres_on_the_report() {
        let script = map_script(&view(), "https://tiles.example/{z}/{x}/{y}.png");
        assert!(script.contains("setView([40.7128, -74.006], 15)"));
        assert!(script.contains("\"https://tiles.example/{z}/{x}/{y}.png\""));
        assert!(script.contains("Lat: 40.712800, Lng: -74.006000"));
    }

    #[test]
    fn script_escapes_the_address() {
        let script = map_script(&view(), "https://tiles.example");
        assert!(!script.contains("</script>"));
        assert!(script.contains("123 Main St <\\/script>"));
    }
}
