use dashboard_core::format::stat_badge;
use dashboard_core::model::StatIcon;
use leptos::*;

/// Labeled metric badge. All three props are required; leaving one out
/// is a compile error at the call site, not a runtime condition.
#[component]
pub fn StatCard(
    label: String,
    icon: StatIcon,
    number: u32,
    #[prop(default = 50)] icon_px: u16,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-icon" style=format!("font-size: {icon_px}px")>{icon.glyph()}</span>
            <div class="stat-body">
                <h2>{label}</h2>
                <p class="stat-number">{stat_badge(number)}</p>
            </div>
        </div>
    }
}
