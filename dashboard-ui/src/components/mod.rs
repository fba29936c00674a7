mod connections_table;
mod dashboard;
mod jobs_table;
mod revenue_chart;
mod stat_card;
mod trend_map;

pub use connections_table::ConnectionsTable;
pub use dashboard::DashboardPage;
pub use jobs_table::JobsTable;
pub use revenue_chart::RevenueChart;
pub use stat_card::StatCard;
pub use trend_map::TrendMap;
