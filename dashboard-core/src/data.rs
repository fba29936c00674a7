//! The fixed page datasets. The dashboard has no backing store; every
//! table, chart and map owns one of these literal lists.

use crate::model::{
    ConnectionRecord, JobRecord, LatLng, MapMarker, MetricStat, RevenueSample, StatIcon,
};

pub const JOBS_FOOTER: &str = "Last Updated 16-07-2024";

pub const FIGMA_ICON: &str = "assets/figma.png";
pub const PYTHON_ICON: &str = "assets/python.png";
pub const REACT_ICON: &str = "assets/react.png";

pub fn metric_stats() -> Vec<MetricStat> {
    let stat = |label: &str, value, icon| MetricStat {
        label: label.into(),
        value,
        icon,
    };
    vec![
        stat("Projects", 178, StatIcon::Document),
        stat("Pending", 50, StatIcon::Pending),
        stat("Completed", 100, StatIcon::Check),
        stat("Posted", 73, StatIcon::Upload),
    ]
}

pub fn revenue_series() -> Vec<RevenueSample> {
    let months = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    let amounts = [
        1200.0, 1900.0, 3000.0, 5000.0, 2200.0, 3200.0, 4500.0, 6000.0, 7000.0, 8500.0, 9000.0,
        11000.0,
    ];
    months
        .iter()
        .zip(amounts)
        .map(|(month, amount)| RevenueSample {
            month: (*month).into(),
            amount,
        })
        .collect()
}

pub fn jobs() -> Vec<JobRecord> {
    let job = |id, project_name: &str, assigned_to: &str, completed_pct| JobRecord {
        id,
        project_name: project_name.into(),
        assigned_to: assigned_to.into(),
        completed_pct,
    };
    vec![
        job(1, "Project A", "John Doe", 75),
        job(2, "Project B", "Jane Smith", 50),
        job(3, "Project C", "Alex Johnson", 90),
        job(4, "Project D", "Emily Brown", 20),
        job(5, "Project E", "Maxwell", 40),
    ]
}

pub fn connections() -> Vec<ConnectionRecord> {
    let conn = |id, title: &str, sector: &str| ConnectionRecord {
        id,
        title: title.into(),
        sector: sector.into(),
    };
    vec![
        conn(1, "Connection A", "Technology A"),
        conn(2, "Connection B", "Technology B"),
        conn(3, "Connection C", "Technology C"),
        conn(4, "Connection D", "Technology D"),
        conn(5, "Connection E", "Technology E"),
        conn(6, "Connection F", "Technology F"),
    ]
}

pub fn trend_markers() -> Vec<MapMarker> {
    let pin = |lat, lng, icon: &str, title: &str| MapMarker {
        position: LatLng::new(lat, lng),
        icon: Some(icon.into()),
        title: Some(title.into()),
    };
    vec![
        pin(28.6139, 77.209, FIGMA_ICON, "Delhi"),
        pin(12.9716, 77.5946, REACT_ICON, "Bangalore"),
        pin(40.7128, -74.006, PYTHON_ICON, "New York"),
        pin(24.7136, 46.6753, FIGMA_ICON, "Saudi Arabia"),
        pin(22.5726, 88.3639, REACT_ICON, "Kolkata"),
        pin(34.0837, 74.7973, PYTHON_ICON, "Jammu and Kashmir"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_has_one_sample_per_month() {
        let series = revenue_series();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "January");
        assert_eq!(series[11].month, "December");
    }

    #[test]
    fn job_ids_are_unique() {
        let jobs = jobs();
        let mut ids: Vec<u32> = jobs.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn connection_ids_are_unique() {
        let conns = connections();
        let mut ids: Vec<u32> = conns.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), conns.len());
    }

    #[test]
    fn completion_stays_in_percent_range() {
        assert!(jobs().iter().all(|j| j.completed_pct <= 100));
    }

    #[test]
    fn preset_markers_carry_icon_and_title() {
        let markers = trend_markers();
        assert_eq!(markers.len(), 6);
        assert!(markers.iter().all(|m| m.icon.is_some() && m.title.is_some()));
    }
}
