use serde::{Deserialize, Serialize};

/// Glyphs available to the metric cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatIcon {
    Document,
    Pending,
    Check,
    Upload,
}

impl StatIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::Document => "\u{1F4C4}",
            StatIcon::Pending => "\u{23F3}",
            StatIcon::Check => "\u{2714}",
            StatIcon::Upload => "\u{2B06}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    pub label: String,
    pub value: u32,
    pub icon: StatIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueSample {
    pub month: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u32,
    pub project_name: String,
    pub assigned_to: String,
    pub completed_pct: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: u32,
    pub title: String,
    pub sector: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Leaflet accepts `[lat, lng]` pairs everywhere.
    pub fn as_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub position: LatLng,
    pub icon: Option<String>,
    pub title: Option<String>,
}

impl MapMarker {
    pub fn at(position: LatLng) -> Self {
        Self {
            position,
            icon: None,
            title: None,
        }
    }
}
