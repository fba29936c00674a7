use dashboard_core::data::{metric_stats, trend_markers};
use dashboard_core::map::{MapBounds, MapConfig};
use dashboard_core::model::LatLng;
use leptos::*;

use crate::components::{ConnectionsTable, JobsTable, RevenueChart, StatCard, TrendMap};
use crate::style::PageStyle;

/// The whole page: header, metrics grid, chart/jobs row and
/// connections/map row. Data flows one way from the fixed datasets
/// into the child components; nothing writes back.
#[component]
pub fn DashboardPage(#[prop(optional)] style: Option<PageStyle>) -> impl IntoView {
    let style = style.unwrap_or_default();
    let error = create_rw_signal(None::<String>);

    // Strict deployment: bounds enforced, zoom limited, no click handler.
    let map_config = MapConfig::preset(LatLng::new(12.9716, 77.5946), 5, MapBounds::world_trend());

    let stat_cards = metric_stats()
        .into_iter()
        .map(|stat| {
            view! {
                <StatCard
                    label=stat.label
                    icon=stat.icon
                    number=stat.value
                    icon_px=style.stat_icon_px
                />
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                // Rendered affordance only; no report mechanism is wired up.
                <button class="download-button">
                    <span>"Download Report"</span>
                    <span class="button-icon">"\u{2B06}"</span>
                </button>
            </div>

            <div class="metrics-grid" style=style.gap_style()>{stat_cards}</div>

            <div class="two-col" style=style.gap_style()>
                <RevenueChart error=error/>
                <JobsTable/>
            </div>

            <div class="two-col" style=style.gap_style()>
                <ConnectionsTable/>
                <TrendMap
                    config=map_config
                    markers=trend_markers()
                    error=error
                    icon_px=style.marker_icon_px
                />
            </div>

            <Show when=move || error.get().is_some() fallback=|| ()>
                <pre class="error">{move || error.get().unwrap_or_default()}</pre>
            </Show>
        </div>
    }
}
