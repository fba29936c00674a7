use dashboard_core::format::marker_label;
use dashboard_core::map::{icon_spec, MapConfig, TILE_URL};
use dashboard_core::model::{LatLng, MapMarker};
use js_sys::Object;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{get, set, to_js};

#[wasm_bindgen]
extern "C" {
    /// Map handle from the widget's `L.map(...)`.
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container: &web_sys::HtmlDivElement, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(position: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn leaflet_icon(options: &JsValue) -> JsValue;
}

/// A mounted map with its tile layer attached.
pub struct MountedMap {
    map: LeafletMap,
}

pub fn mount_map(container: &web_sys::HtmlDivElement, config: &MapConfig) -> Result<MountedMap, String> {
    let options = to_js(&config.leaflet_options())?;
    let map = leaflet_map(container, &options);
    let tile_options = to_js(&config.tile_options())?;
    tile_layer(TILE_URL, &tile_options).add_to(&map);
    Ok(MountedMap { map })
}

impl MountedMap {
    /// Drops a pin for the marker; the popup carries the marker's
    /// title or its ordinal default label.
    pub fn add_marker(&self, marker: &MapMarker, index: usize, icon_px: u16) -> Result<(), String> {
        let position = to_js(&marker.position.as_pair())?;
        let options: JsValue = Object::new().into();
        if let Some(url) = &marker.icon {
            let icon = leaflet_icon(&to_js(&icon_spec(url, icon_px))?);
            set(&options, "icon", &icon)?;
        }
        leaflet_marker(&position, &options)
            .add_to(&self.map)
            .bind_popup(&marker_label(marker, index));
        Ok(())
    }

    /// Wires the widget's click event to `handler`, handing over the
    /// clicked coordinate. Only the interactive configuration calls
    /// this; the preset map registers no click handler at all.
    pub fn on_click(&self, handler: impl Fn(LatLng) + 'static) {
        let closure = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            if let Some(position) = clicked_position(&event) {
                handler(position);
            }
        });
        self.map.on("click", closure.as_ref().unchecked_ref());
        // Lives for the page; the map never unregisters it.
        closure.forget();
    }
}

fn clicked_position(event: &JsValue) -> Option<LatLng> {
    let latlng = get(event, "latlng").ok()?;
    let lat = get(&latlng, "lat").ok()?.as_f64()?;
    let lng = get(&latlng, "lng").ok()?.as_f64()?;
    Some(LatLng::new(lat, lng))
}
