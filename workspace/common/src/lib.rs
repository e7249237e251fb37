//! Common transport-layer types shared between the prediction service and the frontend.
//! These structs mirror the `/api/predict` request/response payloads so both sides
//! agree on field names without duplicating shapes.

mod prediction;

pub use prediction::{
    Impact, ParseImpactError, PredictionRequest, PredictionResponse, Recommendation, Savings,
    TrendPoint,
};

/// Path of the prediction endpoint, relative to the API base.
pub const PREDICT_ENDPOINT: &str = "/predict";
