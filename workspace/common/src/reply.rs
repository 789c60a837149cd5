use serde::{de, Deserialize, Deserializer, Serialize};

/// Body returned by the fraud service.
///
/// Every endpoint answers either with its payload or with an object carrying an
/// `error` string. A non-empty `error` field wins even when the rest of the
/// payload is present; an empty one is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure {
        #[serde(deserialize_with = "non_empty")]
        error: String,
    },
    Success(T),
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let error = String::deserialize(deserializer)?;
    if error.is_empty() {
        return Err(de::Error::custom("empty error message"));
    }
    Ok(error)
}

impl<T> ApiReply<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiReply::Success(data) => Ok(data),
            ApiReply::Failure { error } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::PredictionResult;
    use crate::transactions::TransactionRecord;

    #[test]
    fn test_error_field_wins() {
        let body = r#"{"error": "model unavailable", "risk_score": 0.5, "is_fraud": 0}"#;
        let reply: ApiReply<PredictionResult> = serde_json::from_str(body).unwrap();
        assert_eq!(reply.into_result(), Err("model unavailable".to_string()));
    }

    #[test]
    fn test_success_payload() {
        let body = r#"{"risk_score": 0.25, "is_fraud": 0}"#;
        let reply: ApiReply<PredictionResult> = serde_json::from_str(body).unwrap();
        let result = reply.into_result().unwrap();
        assert_eq!(result.risk_score, 0.25);
        assert!(!result.is_fraud());
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let body = r#"{"error": "", "risk_score": 0.25, "is_fraud": 1}"#;
        let reply: ApiReply<PredictionResult> = serde_json::from_str(body).unwrap();
        let result = reply.into_result().unwrap();
        assert_eq!(result.risk_score, 0.25);
        assert!(result.is_fraud());
    }

    #[test]
    fn test_empty_error_alone_is_malformed() {
        let body = r#"{"error": ""}"#;
        let reply: Result<ApiReply<Vec<TransactionRecord>>, _> = serde_json::from_str(body);
        assert!(reply.is_err());
    }

    #[test]
    fn test_error_object_in_place_of_list() {
        let body = r#"{"error": "no such table: Fact_Transaction"}"#;
        let reply: ApiReply<Vec<TransactionRecord>> = serde_json::from_str(body).unwrap();
        assert!(reply.into_result().is_err());
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let body = r#"{"risk": "high"}"#;
        let reply: Result<ApiReply<PredictionResult>, _> = serde_json::from_str(body);
        assert!(reply.is_err());
    }
}
