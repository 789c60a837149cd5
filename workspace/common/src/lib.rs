//! Common transport-layer types shared by the dashboard frontend.
//! These structs mirror the fraud service's request/response payloads, and the
//! presentation state built from them is kept here so it can be tested without
//! a browser.

pub mod charts;
pub mod format;
pub mod panel;
pub mod prediction;
pub mod reply;
pub mod stats;
pub mod transactions;

pub use charts::{ChartKind, PieChart};
pub use panel::Panel;
pub use prediction::{PredictionMessage, PredictionRequest, PredictionResult, ResultRegion};
pub use reply::ApiReply;
pub use stats::{ChartSeries, GlobalStats, KpiDisplay, Kpis, StatsCharts, StatsError};
pub use transactions::{RecordId, TransactionRecord, TransactionRow, TransactionType};
