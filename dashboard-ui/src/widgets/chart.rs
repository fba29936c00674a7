use dashboard_core::chart::{revenue_chart_series, ChartSeries};
use dashboard_core::data::revenue_series;
use dashboard_core::format::tooltip_label;
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{get, set, to_js};

#[wasm_bindgen]
extern "C" {
    /// Chart widget entry point, loaded by the page's script tag.
    type Chart;

    #[wasm_bindgen(constructor)]
    fn new(ctx: &web_sys::HtmlCanvasElement, config: &JsValue) -> Chart;
}

#[derive(Serialize)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<ChartSeries>,
}

/// Draws the fixed revenue line series onto the canvas.
pub fn mount_revenue_chart(canvas: &web_sys::HtmlCanvasElement) -> Result<(), String> {
    let (labels, series) = revenue_chart_series(&revenue_series());
    let data = to_js(&ChartData {
        labels,
        datasets: vec![series],
    })?;
    let options = to_js(&serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": { "display": true, "position": "top" },
            "title": { "display": false },
            "tooltip": { "callbacks": {} }
        }
    }))?;
    install_tooltip_label(&options)?;

    let config: JsValue = Object::new().into();
    set(&config, "type", &JsValue::from_str("line"))?;
    set(&config, "data", &data)?;
    set(&config, "options", &options)?;

    let _chart = Chart::new(canvas, &config);
    Ok(())
}

fn install_tooltip_label(options: &JsValue) -> Result<(), String> {
    let plugins = get(options, "plugins")?;
    let tooltip = get(&plugins, "tooltip")?;
    let callbacks = get(&tooltip, "callbacks")?;
    let label = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
        JsValue::from_str(&tooltip_text(&context))
    });
    set(&callbacks, "label", label.as_ref())?;
    // The widget calls back for the lifetime of the page.
    label.forget();
    Ok(())
}

/// Reads `context.dataset.label` and `context.parsed.y` off the
/// widget's tooltip context and delegates the wording to the core
/// formatting rule.
fn tooltip_text(context: &JsValue) -> String {
    let dataset_label = Reflect::get(context, &JsValue::from_str("dataset"))
        .and_then(|dataset| Reflect::get(&dataset, &JsValue::from_str("label")))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let amount = Reflect::get(context, &JsValue::from_str("parsed"))
        .and_then(|parsed| Reflect::get(&parsed, &JsValue::from_str("y")))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    tooltip_label(&dataset_label, amount)
}
