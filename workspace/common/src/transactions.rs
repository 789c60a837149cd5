use crate::format::fixed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of `/get-recent-transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction_ID")]
    pub transaction_id: RecordId,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(rename = "Sender_ID")]
    pub sender_id: String,
    #[serde(rename = "Receiver_ID")]
    pub receiver_id: String,
    #[serde(rename = "isFraud")]
    pub is_fraud: u8,
}

impl TransactionRecord {
    pub fn is_fraud(&self) -> bool {
        self.is_fraud == 1
    }
}

/// Transaction identifier, shown exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Table row ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub cells: [String; TransactionRow::COLUMNS],
    pub flagged: bool,
}

impl TransactionRow {
    pub const COLUMNS: usize = 6;
    pub const FRAUD_CLASS: &'static str = "fraud-row";
    pub const LOADING_TEXT: &'static str = "Loading transactions...";
    pub const ERROR_TEXT: &'static str = "Error loading transactions.";

    pub fn class(&self) -> Option<&'static str> {
        self.flagged.then_some(Self::FRAUD_CLASS)
    }

    /// Rows in the order the server returned them.
    pub fn from_records(records: &[TransactionRecord]) -> Vec<TransactionRow> {
        records.iter().map(TransactionRow::from).collect()
    }
}

impl From<&TransactionRecord> for TransactionRow {
    fn from(record: &TransactionRecord) -> Self {
        let flagged = record.is_fraud();
        Self {
            cells: [
                record.transaction_id.to_string(),
                record.kind.clone(),
                fixed(record.amount, 2),
                record.sender_id.clone(),
                record.receiver_id.clone(),
                if flagged { "Yes" } else { "No" }.to_string(),
            ],
            flagged,
        }
    }
}

/// Transaction types the prediction form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    Transfer,
    CashOut,
    CashIn,
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Payment,
        TransactionType::Transfer,
        TransactionType::CashOut,
        TransactionType::CashIn,
        TransactionType::Debit,
    ];

    /// Value sent to the prediction endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "PAYMENT",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::CashIn => "CASH_IN",
            TransactionType::Debit => "DEBIT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Payment => "Payment",
            TransactionType::Transfer => "Transfer",
            TransactionType::CashOut => "Cash Out",
            TransactionType::CashIn => "Cash In",
            TransactionType::Debit => "Debit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, is_fraud: u8) -> TransactionRecord {
        TransactionRecord {
            transaction_id: RecordId::Number(id),
            kind: "TRANSFER".to_string(),
            amount: 181.0,
            sender_id: format!("C{}", 1000 + id),
            receiver_id: format!("C{}", 2000 + id),
            is_fraud,
        }
    }

    #[test]
    fn test_parse_server_record() {
        let body = r#"[{
            "Transaction_ID": 99999,
            "type": "CASH_OUT",
            "amount": 181.0,
            "Sender_ID": "C840083671",
            "Receiver_ID": "C38997010",
            "isFraud": 1
        }]"#;
        let records: Vec<TransactionRecord> = serde_json::from_str(body).unwrap();
        let row = TransactionRow::from(&records[0]);

        assert_eq!(
            row.cells,
            [
                "99999".to_string(),
                "CASH_OUT".to_string(),
                "181.00".to_string(),
                "C840083671".to_string(),
                "C38997010".to_string(),
                "Yes".to_string(),
            ]
        );
        assert_eq!(row.class(), Some("fraud-row"));
    }

    #[test]
    fn test_text_identifier_is_kept_verbatim() {
        let body = r#"{"Transaction_ID": "tx-007", "type": "PAYMENT", "amount": 9.839,
            "Sender_ID": "C1", "Receiver_ID": "M2", "isFraud": 0}"#;
        let record: TransactionRecord = serde_json::from_str(body).unwrap();
        let row = TransactionRow::from(&record);

        assert_eq!(row.cells[0], "tx-007");
        assert_eq!(row.cells[2], "9.84");
        assert_eq!(row.cells[5], "No");
        assert_eq!(row.class(), None);
    }

    #[test]
    fn test_rows_keep_order_and_flag_only_fraud() {
        let flags = [0u8, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0];
        let records: Vec<_> = flags
            .iter()
            .enumerate()
            .map(|(i, flag)| record(100 - i as i64, *flag))
            .collect();

        let rows = TransactionRow::from_records(&records);

        assert_eq!(rows.len(), 20);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.cells[0], (100 - i as i64).to_string());
            assert_eq!(row.flagged, flags[i] == 1);
        }
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        let records: Vec<TransactionRecord> = serde_json::from_str("[]").unwrap();
        assert!(TransactionRow::from_records(&records).is_empty());
    }

    #[test]
    fn test_fraud_flag_other_than_one_is_not_fraud() {
        let row = TransactionRow::from(&record(1, 2));
        assert!(!row.flagged);
        assert_eq!(row.cells[5], "No");
    }

    #[test]
    fn test_transaction_type_values() {
        for kind in TransactionType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
