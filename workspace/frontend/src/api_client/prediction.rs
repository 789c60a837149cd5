use crate::api_client::{self, ApiError};
use common::{PredictionRequest, PredictionResult};

pub const PREDICT_ENDPOINT: &str = "/predict-fraud";

pub async fn predict_fraud(request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
    log::debug!(
        "Requesting prediction for {} -> {} ({}, {})",
        request.sender_id,
        request.receiver_id,
        request.kind,
        request.amount
    );
    let result = api_client::post::<PredictionResult, _>(PREDICT_ENDPOINT, request).await;

    if let Ok(ref prediction) = result {
        log::info!(
            "Prediction: is_fraud={}, risk_score={}",
            prediction.is_fraud,
            prediction.risk_score
        );
    }

    result
}
