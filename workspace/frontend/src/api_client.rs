pub mod prediction;
pub mod stats;
pub mod transactions;

use common::ApiReply;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use crate::settings;

/// Failure of one call to the fraud service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-2xx status without an `error` body
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Body is not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The service answered with an explicit `error` field
    #[error("Server error: {0}")]
    Server(String),
}

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Maps a response to its payload. An `error` field is honored whatever the
/// status code; a body that parses neither way is a decode failure on 2xx and an
/// HTTP failure otherwise.
async fn read_reply<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    match serde_json::from_str::<ApiReply<T>>(&body) {
        Ok(ApiReply::Failure { error }) => Err(ApiError::Server(error)),
        Ok(ApiReply::Success(data)) if response.ok() => Ok(data),
        Ok(ApiReply::Success(_)) => Err(ApiError::Http(status)),
        Err(_) if !response.ok() => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()));

    let result = match response {
        Ok(response) => {
            log::trace!("GET {} - Response received, parsing JSON", endpoint);
            read_reply(response).await
        }
        Err(e) => Err(e),
    };

    match &result {
        Ok(_) => log::info!("GET {} - Success", endpoint),
        Err(e) => log::error!("GET {} - {}", endpoint, e),
    }
    result
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let request = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)));

    let result = match request {
        Ok(request) => match request.send().await {
            Ok(response) => {
                log::trace!("POST {} - Response received, parsing JSON", endpoint);
                read_reply(response).await
            }
            Err(e) => Err(ApiError::Request(e.to_string())),
        },
        Err(e) => Err(e),
    };

    match &result {
        Ok(_) => log::info!("POST {} - Success", endpoint),
        Err(e) => log::error!("POST {} - {}", endpoint, e),
    }
    result
}
