//! Typed bindings to the external chart and map widgets. Option
//! objects are built from serde values; failures come back as plain
//! strings for the page's error panel.

pub mod chart;
pub mod leaflet;

use wasm_bindgen::JsValue;

pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

pub(crate) fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| format!("failed to set '{key}': {e:?}"))
}

pub(crate) fn get(target: &JsValue, key: &str) -> Result<JsValue, String> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .map_err(|e| format!("failed to read '{key}': {e:?}"))
}
