use crate::format::fixed;
use serde::{Deserialize, Serialize};

/// Body posted to `/predict-fraud`. Values are sent exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Fraud probability in `[0, 1]`.
    pub risk_score: f64,
    pub is_fraud: u8,
}

impl PredictionResult {
    pub fn is_fraud(&self) -> bool {
        self.is_fraud == 1
    }

    /// Risk as a percentage with two decimals, e.g. `87.34`.
    pub fn risk_percent(&self) -> String {
        fixed(self.risk_score * 100.0, 2)
    }
}

/// Message shown under the prediction form.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionMessage {
    Checking,
    Danger { risk_percent: String },
    Safe { risk_percent: String },
    Failed,
}

impl PredictionMessage {
    pub fn text(&self) -> String {
        match self {
            PredictionMessage::Checking => "Checking...".to_string(),
            PredictionMessage::Danger { risk_percent } => {
                format!("DANGER! This transaction is {}% likely to be fraud.", risk_percent)
            }
            PredictionMessage::Safe { risk_percent } => {
                format!("This transaction appears safe ({}% risk).", risk_percent)
            }
            PredictionMessage::Failed => "Error checking transaction.".to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PredictionMessage::Checking => "result",
            PredictionMessage::Danger { .. } | PredictionMessage::Failed => "result result-danger",
            PredictionMessage::Safe { .. } => "result result-safe",
        }
    }
}

impl From<&PredictionResult> for PredictionMessage {
    fn from(result: &PredictionResult) -> Self {
        let risk_percent = result.risk_percent();
        if result.is_fraud() {
            PredictionMessage::Danger { risk_percent }
        } else {
            PredictionMessage::Safe { risk_percent }
        }
    }
}

/// State of the message region: hidden until the first submit, then either
/// waiting on the service or showing the last answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultRegion {
    #[default]
    Hidden,
    Pending,
    Resolved(PredictionMessage),
}

impl ResultRegion {
    /// Outcome of one request; any error maps to the generic failure message.
    pub fn resolved<E>(outcome: &Result<PredictionResult, E>) -> Self {
        match outcome {
            Ok(result) => ResultRegion::Resolved(PredictionMessage::from(result)),
            Err(_) => ResultRegion::Resolved(PredictionMessage::Failed),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ResultRegion::Pending)
    }

    pub fn message(&self) -> Option<PredictionMessage> {
        match self {
            ResultRegion::Hidden => None,
            ResultRegion::Pending => Some(PredictionMessage::Checking),
            ResultRegion::Resolved(message) => Some(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = PredictionRequest {
            sender_id: "C1231006815".to_string(),
            receiver_id: "M1979787155".to_string(),
            kind: "PAYMENT".to_string(),
            amount: "9839.64".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "sender_id": "C1231006815",
                "receiver_id": "M1979787155",
                "type": "PAYMENT",
                "amount": "9839.64"
            })
        );
    }

    #[test]
    fn test_risk_percent_rounds_ties_up() {
        let result = PredictionResult { risk_score: 0.12125, is_fraud: 0 };
        assert_eq!(result.risk_percent(), "12.13");

        let result = PredictionResult { risk_score: 0.00625, is_fraud: 0 };
        assert_eq!(result.risk_percent(), "0.63");
    }

    #[test]
    fn test_fraud_result_renders_danger() {
        let result = PredictionResult { risk_score: 0.8734, is_fraud: 1 };
        let message = PredictionMessage::from(&result);

        assert!(message.text().contains("87.34%"));
        assert_eq!(message.class(), "result result-danger");
    }

    #[test]
    fn test_safe_result_renders_safe() {
        let result = PredictionResult { risk_score: 0.012, is_fraud: 0 };
        let message = PredictionMessage::from(&result);

        assert_eq!(message.text(), "This transaction appears safe (1.20% risk).");
        assert_eq!(message.class(), "result result-safe");
    }

    #[test]
    fn test_service_error_renders_generic_failure() {
        let body = r#"{"error": "model unavailable"}"#;
        let reply: crate::ApiReply<PredictionResult> = serde_json::from_str(body).unwrap();
        let region = ResultRegion::resolved(&reply.into_result());

        let message = region.message().unwrap();
        assert_eq!(message.text(), "Error checking transaction.");
        assert_eq!(message.class(), "result result-danger");
    }

    #[test]
    fn test_region_lifecycle() {
        let region = ResultRegion::default();
        assert_eq!(region.message(), None);

        let region = ResultRegion::Pending;
        assert!(region.is_pending());
        assert_eq!(region.message(), Some(PredictionMessage::Checking));
        assert_eq!(PredictionMessage::Checking.text(), "Checking...");
        assert_eq!(PredictionMessage::Checking.class(), "result");

        let outcome: Result<_, String> = Ok(PredictionResult { risk_score: 0.5, is_fraud: 0 });
        let region = ResultRegion::resolved(&outcome);
        assert!(!region.is_pending());
        assert_eq!(
            region.message(),
            Some(PredictionMessage::Safe { risk_percent: "50.00".to_string() })
        );
    }
}
