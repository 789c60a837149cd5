use crate::api_client::{self, ApiError};
use common::GlobalStats;

pub const GLOBAL_STATS_ENDPOINT: &str = "/get-global-stats";

/// `loadStats`: fetches the dashboard KPIs and chart datasets.
pub async fn get_global_stats() -> Result<GlobalStats, ApiError> {
    log::trace!("Fetching global statistics");
    let stats = api_client::get::<GlobalStats>(GLOBAL_STATS_ENDPOINT).await?;

    stats.validate().map_err(|e| {
        log::error!("Global statistics rejected: {}", e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!(
        "Loaded global statistics: {} transactions, {} fraud",
        stats.kpis.total_transactions,
        stats.kpis.total_fraud
    );
    Ok(stats)
}
