//! Map configuration and marker state. The map widget itself is an
//! external collaborator; this module only owns the option values
//! handed to it and the append-only marker sequence.

use serde::Serialize;

use crate::model::{LatLng, MapMarker};

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Rectangular pan limit expressed as four corner coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MapBounds {
    corners: [LatLng; 4],
}

impl MapBounds {
    pub fn new(corners: [LatLng; 4]) -> Self {
        Self { corners }
    }

    /// The bounding box the trend map ships with.
    pub fn world_trend() -> Self {
        Self::new([
            LatLng::new(-82.8628, 135.0),
            LatLng::new(71.7069, 42.6043),
            LatLng::new(66.0272, -169.7022),
            LatLng::new(52.1307, -3.7837),
        ])
    }

    pub fn corner_pairs(&self) -> Vec<[f64; 2]> {
        self.corners.iter().map(|c| c.as_pair()).collect()
    }
}

/// One map component, two deployments. `preset` is the strict variant
/// (bounds enforced, zoom limited, wrap disabled, no click handler);
/// `interactive` is the permissive variant that appends a marker per
/// click and enforces nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub bounds: Option<MapBounds>,
    pub bounds_viscosity: f64,
    pub min_zoom: Option<u8>,
    pub tile_max_zoom: Option<u8>,
    pub wrap_tiles: bool,
    pub interactive: bool,
}

impl MapConfig {
    pub fn preset(center: LatLng, zoom: u8, bounds: MapBounds) -> Self {
        Self {
            center,
            zoom,
            bounds: Some(bounds),
            bounds_viscosity: 1.0,
            min_zoom: Some(3),
            tile_max_zoom: Some(12),
            wrap_tiles: false,
            interactive: false,
        }
    }

    pub fn interactive(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            bounds: None,
            bounds_viscosity: 0.0,
            min_zoom: None,
            tile_max_zoom: None,
            wrap_tiles: true,
            interactive: true,
        }
    }

    pub fn leaflet_options(&self) -> LeafletMapOptions {
        LeafletMapOptions {
            center: self.center.as_pair(),
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_bounds: self.bounds.as_ref().map(MapBounds::corner_pairs),
            max_bounds_viscosity: self.bounds_viscosity,
        }
    }

    pub fn tile_options(&self) -> TileLayerOptions {
        TileLayerOptions {
            attribution: TILE_ATTRIBUTION,
            max_zoom: self.tile_max_zoom,
            no_wrap: !self.wrap_tiles,
        }
    }
}

/// Option object for the map constructor, shaped for the widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafletMapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bounds: Option<Vec<[f64; 2]>>,
    pub max_bounds_viscosity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
    pub no_wrap: bool,
}

/// Pin image descriptor. Only one icon shape exists, so this is a pure
/// function of the image reference and its pixel size: anchored at
/// bottom-center, popup opening above the pin.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub icon_url: String,
    pub icon_size: [u16; 2],
    pub icon_anchor: [u16; 2],
    pub popup_anchor: [i16; 2],
}

pub fn icon_spec(url: &str, size_px: u16) -> IconSpec {
    IconSpec {
        icon_url: url.into(),
        icon_size: [size_px, size_px],
        icon_anchor: [size_px / 2, size_px],
        popup_anchor: [0, -(size_px as i16)],
    }
}

/// Owned, append-only marker list. Markers are never updated or
/// removed within a page session; the interactive map appends one per
/// click and the sequence is lost on reload.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MarkerSequence {
    markers: Vec<MapMarker>,
}

impl MarkerSequence {
    /// Interactive maps start with a single default position.
    pub fn new(initial: LatLng) -> Self {
        Self {
            markers: vec![MapMarker::at(initial)],
        }
    }

    /// Preset maps get their full marker list up front.
    pub fn from_markers(markers: Vec<MapMarker>) -> Self {
        Self { markers }
    }

    /// Appends a clicked coordinate and returns the marker's 0-based
    /// index. Coordinates are accepted unclamped; an out-of-range
    /// point simply renders off the visible tile set.
    pub fn append(&mut self, position: LatLng) -> usize {
        self.markers.push(MapMarker::at(position));
        self.markers.len() - 1
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_config_is_strict() {
        let config = MapConfig::preset(LatLng::new(12.9716, 77.5946), 5, MapBounds::world_trend());
        assert!(!config.interactive);
        assert_eq!(config.bounds_viscosity, 1.0);
        assert_eq!(config.min_zoom, Some(3));
        assert_eq!(config.tile_max_zoom, Some(12));
        assert!(!config.wrap_tiles);
        assert!(config.bounds.is_some());
    }

    #[test]
    fn interactive_config_enforces_nothing() {
        let config = MapConfig::interactive(LatLng::new(12.9716, 77.5946), 10);
        assert!(config.interactive);
        assert!(config.bounds.is_none());
        assert_eq!(config.bounds_viscosity, 0.0);
        assert_eq!(config.min_zoom, None);
        assert_eq!(config.tile_max_zoom, None);
    }

    #[test]
    fn interactive_sequence_starts_with_default_position() {
        let seq = MarkerSequence::new(LatLng::new(12.9716, 77.5946));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.markers()[0].position, LatLng::new(12.9716, 77.5946));
    }

    #[test]
    fn click_appends_to_end_of_sequence() {
        let mut seq = MarkerSequence::new(LatLng::new(12.9716, 77.5946));
        let index = seq.append(LatLng::new(12.0, 77.0));
        assert_eq!(index, 1);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.markers()[1].position, LatLng::new(12.0, 77.0));
    }

    #[test]
    fn out_of_range_coordinates_are_kept_unclamped() {
        let mut seq = MarkerSequence::new(LatLng::new(0.0, 0.0));
        seq.append(LatLng::new(250.0, -400.0));
        assert_eq!(seq.markers()[1].position, LatLng::new(250.0, -400.0));
    }

    #[test]
    fn icon_spec_anchors_at_bottom_center() {
        let spec = icon_spec("assets/figma.png", 25);
        assert_eq!(spec.icon_size, [25, 25]);
        assert_eq!(spec.icon_anchor, [12, 25]);
        assert_eq!(spec.popup_anchor, [0, -25]);
    }

    #[test]
    fn map_options_serialize_with_widget_keys() {
        let config = MapConfig::preset(LatLng::new(12.9716, 77.5946), 5, MapBounds::world_trend());
        let json = serde_json::to_value(config.leaflet_options()).expect("serialize");
        assert_eq!(json["zoom"], 5);
        assert_eq!(json["minZoom"], 3);
        assert_eq!(json["maxBoundsViscosity"], 1.0);
        assert_eq!(json["maxBounds"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn interactive_options_omit_unused_limits() {
        let config = MapConfig::interactive(LatLng::new(0.0, 0.0), 4);
        let json = serde_json::to_value(config.leaflet_options()).expect("serialize");
        assert!(json.get("minZoom").is_none());
        assert!(json.get("maxBounds").is_none());
    }
}
