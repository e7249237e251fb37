use ecowatt_common::{PREDICT_ENDPOINT, PredictionRequest, PredictionResponse};
use thiserror::Error;

use super::ApiError;
use crate::api_client;

const PREDICTION_FAILED: &str = "Prediction failed. Please try again.";
const NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The service answered with `success: false`.
    #[error("prediction rejected by service ({})", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },
    /// Network, serialization or decode failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PredictionError {
    /// Message shown to the user.
    pub fn alert_message(&self) -> &'static str {
        match self {
            PredictionError::Rejected { .. } => PREDICTION_FAILED,
            PredictionError::Api(_) => NETWORK_ERROR,
        }
    }
}

/// Turn a decoded response into the prediction or a rejection.
pub fn accept(response: PredictionResponse) -> Result<PredictionResponse, PredictionError> {
    if response.success {
        Ok(response)
    } else {
        Err(PredictionError::Rejected {
            reason: response.error,
        })
    }
}

/// POST the request to the prediction endpoint.
pub async fn predict(request: &PredictionRequest) -> Result<PredictionResponse, PredictionError> {
    log::trace!(
        "Requesting prediction for {} ({} people, {} appliances)",
        request.location,
        request.household_size,
        request.appliances.len()
    );
    let response = api_client::post_json::<PredictionResponse, _>(PREDICT_ENDPOINT, request).await?;
    let result = accept(response);

    match &result {
        Ok(prediction) => log::info!("Prediction received: {} kWh", prediction.prediction),
        Err(e) => log::warn!("Prediction not available: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_accepted() {
        let response = PredictionResponse {
            success: true,
            prediction: 350.0,
            ..Default::default()
        };

        assert_eq!(accept(response.clone()), Ok(response));
    }

    #[test]
    fn test_unsuccessful_response_is_rejected() {
        let response = PredictionResponse {
            success: false,
            error: Some("model offline".to_string()),
            ..Default::default()
        };

        let err = accept(response).unwrap_err();
        assert_eq!(err.alert_message(), "Prediction failed. Please try again.");
        assert_eq!(err.to_string(), "prediction rejected by service (model offline)");
    }

    #[test]
    fn test_transport_failures_use_network_message() {
        let transport = PredictionError::from(ApiError::Transport("connection refused".to_string()));
        let decode = PredictionError::from(ApiError::Decode {
            status: 502,
            message: "expected value at line 1".to_string(),
        });

        assert_eq!(transport.alert_message(), "Network error. Please try again.");
        assert_eq!(decode.alert_message(), "Network error. Please try again.");
        assert_eq!(transport.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_rejection_without_reason() {
        let err = PredictionError::Rejected { reason: None };
        assert_eq!(err.to_string(), "prediction rejected by service (no reason given)");
    }
}
