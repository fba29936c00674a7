use leptos::html::Canvas;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::widgets::chart::mount_revenue_chart;

/// Twelve-month revenue line with a filled area under the curve. The
/// chart widget draws onto the canvas once it is in the document.
#[component]
pub fn RevenueChart(error: RwSignal<Option<String>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = mount_revenue_chart(&canvas) {
                web_sys::console::warn_1(&JsValue::from_str(&e));
                error.set(Some(format!("chart: {e}")));
            }
        }
    });

    view! {
        <div class="panel">
            <h2>"Income Graph"</h2>
            <div class="chart-holder">
                <canvas node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
