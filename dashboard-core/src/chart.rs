//! Data-to-series mapping for the revenue chart. The chart widget is
//! an external collaborator; this module only shapes the dataset and
//! option values it consumes.

use serde::Serialize;

use crate::model::RevenueSample;

/// One line series, shaped for the chart widget's dataset object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

/// Splits the samples into month labels (x) and a smoothed, filled
/// revenue series (y), preserving sample order.
pub fn revenue_chart_series(samples: &[RevenueSample]) -> (Vec<String>, ChartSeries) {
    let labels = samples.iter().map(|s| s.month.clone()).collect();
    let series = ChartSeries {
        label: "Revenue".into(),
        data: samples.iter().map(|s| s.amount).collect(),
        border_color: "rgba(75,192,192,1)".into(),
        background_color: "rgba(75,192,192,0.2)".into(),
        fill: true,
        tension: 0.4,
    };
    (labels, series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::revenue_series;

    #[test]
    fn maps_months_to_x_and_amounts_to_y() {
        let samples = revenue_series();
        let (labels, series) = revenue_chart_series(&samples);
        assert_eq!(labels.len(), 12);
        assert_eq!(series.data.len(), 12);
        assert_eq!(labels[8], "September");
        assert_eq!(series.data[8], 7000.0);
    }

    #[test]
    fn series_is_smoothed_and_filled() {
        let (_, series) = revenue_chart_series(&revenue_series());
        assert!(series.fill);
        assert_eq!(series.tension, 0.4);
        assert_eq!(series.label, "Revenue");
    }

    #[test]
    fn dataset_serializes_with_widget_keys() {
        let (_, series) = revenue_chart_series(&revenue_series());
        let json = serde_json::to_value(&series).expect("serialize");
        assert_eq!(json["borderColor"], "rgba(75,192,192,1)");
        assert_eq!(json["backgroundColor"], "rgba(75,192,192,0.2)");
    }
}
