//! Text formatting rules shared by the page. These strings are part of
//! the page contract, so they live here rather than inline in views.

use crate::model::MapMarker;

/// Metric badge text, e.g. `178` renders as `"178+"`.
pub fn stat_badge(value: u32) -> String {
    format!("{value}+")
}

/// Chart tooltip text: `"<label>: $<amount>"`, with the label segment
/// dropped entirely when the dataset has no label.
pub fn tooltip_label(dataset_label: &str, amount: f64) -> String {
    let amount = format_amount(amount);
    if dataset_label.is_empty() {
        format!("${amount}")
    } else {
        format!("{dataset_label}: ${amount}")
    }
}

/// Whole amounts print without a decimal part.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// Tables number rows by list position, not by record id.
pub fn row_number(index: usize) -> usize {
    index + 1
}

pub fn completion_cell(pct: u8) -> String {
    format!("{pct}%")
}

/// Popup text for a marker pin: the title if present, else an ordinal
/// default where `index` is the marker's 0-based position.
pub fn marker_label(marker: &MapMarker, index: usize) -> String {
    match &marker.title {
        Some(title) => title.clone(),
        None => format!("Marker {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LatLng, MapMarker};

    #[test]
    fn stat_badge_appends_plus() {
        assert_eq!(stat_badge(178), "178+");
    }

    #[test]
    fn tooltip_includes_dataset_label() {
        assert_eq!(tooltip_label("Revenue", 7000.0), "Revenue: $7000");
    }

    #[test]
    fn tooltip_drops_colon_for_empty_label() {
        assert_eq!(tooltip_label("", 500.0), "$500");
    }

    #[test]
    fn tooltip_keeps_fractional_amounts() {
        assert_eq!(tooltip_label("Revenue", 499.5), "Revenue: $499.5");
    }

    #[test]
    fn rows_number_from_position_not_id() {
        // ids [1, 2, 4, 7] still number 1..=4
        let indices: Vec<usize> = (0..4).map(row_number).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn completion_is_percent_suffixed() {
        assert_eq!(completion_cell(75), "75%");
    }

    #[test]
    fn marker_label_prefers_title() {
        let mut marker = MapMarker::at(LatLng::new(12.0, 77.0));
        marker.title = Some("Bangalore".into());
        assert_eq!(marker_label(&marker, 3), "Bangalore");
    }

    #[test]
    fn marker_label_falls_back_to_ordinal() {
        let marker = MapMarker::at(LatLng::new(12.0, 77.0));
        assert_eq!(marker_label(&marker, 0), "Marker 1");
        assert_eq!(marker_label(&marker, 4), "Marker 5");
    }
}
