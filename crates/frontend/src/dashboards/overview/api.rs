use contracts::dashboard::DashboardStats;

use crate::shared::api;

/// Aggregate counts, value totals and the recent-products sub-list in one
/// round trip.
pub async fn fetch_dashboard() -> Result<DashboardStats, String> {
    api::get_json("/dashboard").await
}
