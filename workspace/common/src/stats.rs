use crate::format::{fixed, group_indian, group_thousands, round_half_up};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Aggregate statistics served by `/get-global-stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub kpis: Kpis,
    pub charts: StatsCharts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_transactions: i64,
    pub total_volume: f64,
    pub total_fraud: i64,
    /// Percentage, already multiplied by 100.
    pub fraud_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsCharts {
    pub type_chart: ChartSeries,
    pub fraud_chart: ChartSeries,
}

/// Parallel label/value sequences for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Chart '{chart}' has {labels} labels but {values} values")]
    UnpairedSeries {
        chart: &'static str,
        labels: usize,
        values: usize,
    },
}

impl ChartSeries {
    pub fn validate(&self, chart: &'static str) -> Result<(), StatsError> {
        if self.labels.len() != self.data.len() {
            let err = StatsError::UnpairedSeries {
                chart,
                labels: self.labels.len(),
                values: self.data.len(),
            };
            warn!(%err, "Rejecting chart series");
            return Err(err);
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl GlobalStats {
    /// Checks the chart invariant; a payload that fails it is treated as malformed.
    pub fn validate(&self) -> Result<(), StatsError> {
        self.charts.type_chart.validate("type_chart")?;
        self.charts.fraud_chart.validate("fraud_chart")?;
        Ok(())
    }
}

/// Text shown in the four KPI cards.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiDisplay {
    pub total_transactions: String,
    pub total_volume: String,
    pub total_fraud: String,
    pub fraud_rate: String,
}

impl KpiDisplay {
    pub const PLACEHOLDER: &'static str = "-";

    pub fn placeholder() -> Self {
        Self {
            total_transactions: Self::PLACEHOLDER.to_string(),
            total_volume: Self::PLACEHOLDER.to_string(),
            total_fraud: Self::PLACEHOLDER.to_string(),
            fraud_rate: Self::PLACEHOLDER.to_string(),
        }
    }
}

impl From<&Kpis> for KpiDisplay {
    fn from(kpis: &Kpis) -> Self {
        Self {
            total_transactions: group_thousands(kpis.total_transactions),
            total_volume: group_indian(round_half_up(kpis.total_volume)),
            total_fraud: group_thousands(kpis.total_fraud),
            fraud_rate: format!("{}%", fixed(kpis.fraud_rate, 4)),
        }
    }
}
