use std::rc::Rc;

use dashboard_core::map::{MapConfig, MarkerSequence};
use dashboard_core::model::MapMarker;
use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::widgets::leaflet::{mount_map, MountedMap};

/// Bounded/pannable map with pin markers. Preset and interactive are
/// two configurations of this one component: preset maps get their
/// marker list up front and ignore clicks; interactive maps start from
/// a single default position and append a marker per click.
#[component]
pub fn TrendMap(
    config: MapConfig,
    #[prop(optional)] markers: Option<Vec<MapMarker>>,
    error: RwSignal<Option<String>>,
    #[prop(default = 25)] icon_px: u16,
) -> impl IntoView {
    let sequence = create_rw_signal(initial_sequence(&config, markers));
    let container_ref = create_node_ref::<Div>();

    create_effect(move |_| {
        if let Some(container) = container_ref.get() {
            if let Err(e) = mount(&container, &config, sequence, icon_px) {
                web_sys::console::warn_1(&JsValue::from_str(&e));
                error.set(Some(format!("map: {e}")));
            }
        }
    });

    view! {
        <div class="panel">
            <h2>"Technology Trending"</h2>
            <div class="map-holder" node_ref=container_ref></div>
        </div>
    }
}

fn initial_sequence(config: &MapConfig, markers: Option<Vec<MapMarker>>) -> MarkerSequence {
    if config.interactive {
        MarkerSequence::new(config.center)
    } else {
        MarkerSequence::from_markers(markers.unwrap_or_default())
    }
}

fn mount(
    container: &web_sys::HtmlDivElement,
    config: &MapConfig,
    sequence: RwSignal<MarkerSequence>,
    icon_px: u16,
) -> Result<(), String> {
    let map = Rc::new(mount_map(container, config)?);
    for (index, marker) in sequence.get_untracked().markers().iter().enumerate() {
        map.add_marker(marker, index, icon_px)?;
    }

    if config.interactive {
        let map_for_click = Rc::clone(&map);
        map.on_click(move |position| {
            let mut index = 0;
            sequence.update(|seq| index = seq.append(position));
            let marker = MapMarker::at(position);
            if let Err(e) = map_for_click.add_marker(&marker, index, icon_px) {
                web_sys::console::warn_1(&JsValue::from_str(&e));
            }
        });
    }
    Ok(())
}
