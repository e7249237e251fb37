pub mod prediction;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings;

/// Transport-level failure: the request never produced a usable JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },
}

/// POST `body` as JSON and decode the JSON reply.
///
/// The body is decoded whatever the HTTP status: the prediction service reports
/// failures in the payload itself, so a non-2xx reply with a valid body is not a
/// transport error.
pub async fn post_json<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| {
            let error = ApiError::Serialize(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = ApiError::Transport(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?;

    let status = response.status();
    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, status);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let decoded = response.json::<T>().await.map_err(|e| {
        let error = ApiError::Decode {
            status,
            message: e.to_string(),
        };
        log::error!("POST {} - {}", endpoint, error);
        error
    })?;

    log::info!("POST {} - Response decoded (HTTP {})", endpoint, status);
    Ok(decoded)
}
