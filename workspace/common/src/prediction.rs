use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

// ===================== Request =====================

/// Body of `POST /api/predict`.
///
/// `appliances` is a set: the selected checkboxes, serialized as a sorted array so the
/// body does not depend on the order the checkboxes appear in the page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub location: String,
    pub household_size: i64,
    #[serde(default)]
    pub current_usage: i64,
    #[serde(default)]
    pub appliances: BTreeSet<String>,
}

impl PredictionRequest {
    pub fn new<I, S>(location: impl Into<String>, household_size: i64, current_usage: i64, appliances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            location: location.into(),
            household_size,
            current_usage,
            appliances: appliances.into_iter().map(Into::into).collect(),
        }
    }
}

// ===================== Response =====================

/// Monthly savings block of a prediction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    #[serde(default)]
    pub monthly_savings: f64,
}

/// Prediction service response.
///
/// Only `success` is required on the wire. A failure body such as
/// `{"success": false}` must still decode so the caller can tell a rejected
/// prediction apart from a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub bill_estimate: f64,
    #[serde(default)]
    pub savings: Savings,
    #[serde(default)]
    pub carbon_footprint: f64,
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<Vec<TrendPoint>>,
    /// Optional failure reason sent along with `success: false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single actionable suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Recommendation {
    pub category: String,
    pub suggestion: String,
    #[schema(value_type = String)]
    pub impact: Impact,
    pub savings: String,
}

/// One month of forecast data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub predicted: f64,
    pub optimized: f64,
}

// ===================== Impact =====================

/// Qualitative impact rating.
///
/// Known levels are matched case-insensitively; any other label is kept verbatim so
/// one unexpected value never costs the rest of the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Impact {
    Low,
    Medium,
    High,
    Other(String),
}

impl Impact {
    pub fn as_str(&self) -> &str {
        match self {
            Impact::Low => "Low",
            Impact::Medium => "Medium",
            Impact::High => "High",
            Impact::Other(label) => label,
        }
    }

    /// Lower-cased name with inner whitespace collapsed to `-`, used to derive the
    /// badge class.
    pub fn slug(&self) -> String {
        self.as_str()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown impact level '{0}' (expected low, medium or high)")]
pub struct ParseImpactError(pub String);

/// Strict parse: only the three known levels are accepted.
impl FromStr for Impact {
    type Err = ParseImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Impact::Low),
            "medium" => Ok(Impact::Medium),
            "high" => Ok(Impact::High),
            _ => Err(ParseImpactError(s.to_string())),
        }
    }
}

impl From<String> for Impact {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Impact::Other(value))
    }
}

impl From<Impact> for String {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
