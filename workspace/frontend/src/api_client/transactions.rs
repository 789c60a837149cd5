use crate::api_client::{self, ApiError};
use common::TransactionRecord;

pub const RECENT_TRANSACTIONS_ENDPOINT: &str = "/get-recent-transactions";

/// `loadRecentTransactions`: the server decides how many records come back.
pub async fn get_recent_transactions() -> Result<Vec<TransactionRecord>, ApiError> {
    log::trace!("Fetching recent transactions");
    let result = api_client::get::<Vec<TransactionRecord>>(RECENT_TRANSACTIONS_ENDPOINT).await;

    if let Ok(ref records) = result {
        log::info!("Successfully fetched {} recent transactions", records.len());
    }

    result
}
