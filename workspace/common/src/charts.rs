//! Plotly traces for the two dashboard charts.

use crate::stats::ChartSeries;
use serde_json::{Value, json};

pub const TYPE_CHART_COLORS: [&str; 5] = ["#0a9396", "#94d2bd", "#e9d8a6", "#ee9b00", "#ae2012"];
pub const FRAUD_CHART_COLORS: [&str; 2] = ["#2d6a4f", "#9b2226"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Doughnut,
}

impl ChartKind {
    fn hole(&self) -> f64 {
        match self {
            ChartKind::Pie => 0.0,
            ChartKind::Doughnut => 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub kind: ChartKind,
    pub name: &'static str,
    pub series: ChartSeries,
    pub colors: &'static [&'static str],
}

impl PieChart {
    pub fn transaction_types(series: ChartSeries) -> Self {
        Self {
            kind: ChartKind::Pie,
            name: "Transaction Types",
            series,
            colors: &TYPE_CHART_COLORS,
        }
    }

    pub fn fraud_split(series: ChartSeries) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            name: "Transaction Status",
            series,
            colors: &FRAUD_CHART_COLORS,
        }
    }

    /// Single-trace data array for `Plotly.newPlot`.
    pub fn traces(&self) -> Value {
        json!([{
            "type": "pie",
            "name": self.name,
            "labels": self.series.labels,
            "values": self.series.data,
            "hole": self.kind.hole(),
            "sort": false,
            "marker": { "colors": self.colors },
            "hoverinfo": "label+value+percent",
            "textinfo": "percent"
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], data: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_pie_trace_keeps_pairs_in_order() {
        let chart = PieChart::transaction_types(series(&["CASH_OUT", "PAYMENT"], &[30.0, 10.0]));
        let trace = &chart.traces()[0];

        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["hole"], 0.0);
        assert_eq!(trace["sort"], false);
        assert_eq!(trace["labels"], json!(["CASH_OUT", "PAYMENT"]));
        assert_eq!(trace["values"], json!([30.0, 10.0]));
        assert_eq!(trace["marker"]["colors"][0], "#0a9396");
    }

    #[test]
    fn test_doughnut_trace() {
        let chart = PieChart::fraud_split(series(
            &["Safe Transactions", "Fraud Transactions"],
            &[99_887.0, 113.0],
        ));
        let trace = &chart.traces()[0];

        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(trace["hole"], 0.5);
        assert_eq!(trace["name"], "Transaction Status");
        assert_eq!(trace["marker"]["colors"], json!(["#2d6a4f", "#9b2226"]));
    }
}
