//! Display strings projected from a prediction response.
//!
//! Values are interpolated as received, with fixed unit suffixes. No rounding and no
//! locale handling: the prediction service already sends display-ready numbers.

use ecowatt_common::{Impact, PredictionResponse, Recommendation};

/// Placeholder shown in summary fields before the first prediction.
pub const PLACEHOLDER: &str = "--";

fn number(value: f64) -> String {
    format!("{}", value)
}

pub fn kwh(value: f64) -> String {
    format!("{} kWh", number(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

pub fn rupees(value: f64) -> String {
    format!("Rs {}", number(value))
}

pub fn carbon(value: f64) -> String {
    format!("{} kg CO₂", number(value))
}

/// The five result fields of the prediction panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionDisplay {
    pub consumption: String,
    pub confidence: String,
    pub bill: String,
    pub savings: String,
    pub carbon: String,
}

impl From<&PredictionResponse> for PredictionDisplay {
    fn from(response: &PredictionResponse) -> Self {
        Self {
            consumption: kwh(response.prediction),
            confidence: percent(response.confidence),
            bill: rupees(response.bill_estimate),
            savings: rupees(response.savings.monthly_savings),
            carbon: carbon(response.carbon_footprint),
        }
    }
}

/// The four summary fields of the dashboard section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub current_consumption: String,
    pub monthly_bill: String,
    pub carbon_footprint: String,
    pub efficiency_score: String,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self {
            current_consumption: PLACEHOLDER.to_string(),
            monthly_bill: PLACEHOLDER.to_string(),
            carbon_footprint: PLACEHOLDER.to_string(),
            efficiency_score: PLACEHOLDER.to_string(),
        }
    }
}

impl From<&PredictionResponse> for DashboardSummary {
    fn from(response: &PredictionResponse) -> Self {
        Self {
            current_consumption: kwh(response.prediction),
            monthly_bill: rupees(response.bill_estimate),
            carbon_footprint: carbon(response.carbon_footprint),
            efficiency_score: percent(response.efficiency),
        }
    }
}

/// A recommendation card as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub category: String,
    pub suggestion: String,
    pub impact: Impact,
    pub savings: String,
}

impl RecommendationCard {
    pub fn badge_class(&self) -> String {
        format!("impact-{}", self.impact.slug())
    }

    pub fn badge_text(&self) -> String {
        format!("{} Impact", self.impact)
    }
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        Self {
            category: rec.category.clone(),
            suggestion: rec.suggestion.clone(),
            impact: rec.impact.clone(),
            savings: rec.savings.clone(),
        }
    }
}

/// Cards in received order; no sorting, no de-duplication.
pub fn recommendation_cards(recommendations: &[Recommendation]) -> Vec<RecommendationCard> {
    recommendations.iter().map(RecommendationCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecowatt_common::Savings;

    fn response() -> PredictionResponse {
        PredictionResponse {
            success: true,
            prediction: 350.0,
            confidence: 92.0,
            bill_estimate: 4200.0,
            savings: Savings { monthly_savings: 800.0 },
            carbon_footprint: 120.0,
            efficiency: 81.5,
            ..Default::default()
        }
    }

    fn rec(category: &str, impact: Impact) -> Recommendation {
        Recommendation {
            category: category.to_string(),
            suggestion: format!("Tune your {}", category.to_lowercase()),
            impact,
            savings: "Rs 300/month".to_string(),
        }
    }

    #[test]
    fn test_result_fields_use_fixed_suffixes() {
        let display = PredictionDisplay::from(&response());

        assert_eq!(display.consumption, "350 kWh");
        assert_eq!(display.confidence, "92%");
        assert_eq!(display.bill, "Rs 4200");
        assert_eq!(display.savings, "Rs 800");
        assert_eq!(display.carbon, "120 kg CO₂");
    }

    #[test]
    fn test_fractional_values_are_not_rounded() {
        let mut resp = response();
        resp.prediction = 350.75;
        resp.confidence = 92.5;

        let display = PredictionDisplay::from(&resp);
        assert_eq!(display.consumption, "350.75 kWh");
        assert_eq!(display.confidence, "92.5%");
    }

    #[test]
    fn test_dashboard_summary_projection() {
        let summary = DashboardSummary::from(&response());

        assert_eq!(summary.current_consumption, "350 kWh");
        assert_eq!(summary.monthly_bill, "Rs 4200");
        assert_eq!(summary.carbon_footprint, "120 kg CO₂");
        assert_eq!(summary.efficiency_score, "81.5%");
    }

    #[test]
    fn test_summary_starts_with_placeholders() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.current_consumption, PLACEHOLDER);
        assert_eq!(summary.efficiency_score, PLACEHOLDER);
    }

    #[test]
    fn test_recommendation_cards_keep_order_and_count() {
        let recs = vec![
            rec("Lighting", Impact::Low),
            rec("Cooling", Impact::High),
            rec("Lighting", Impact::Low),
        ];

        let cards = recommendation_cards(&recs);
        let categories: Vec<_> = cards.iter().map(|c| c.category.as_str()).collect();

        assert_eq!(cards.len(), 3);
        assert_eq!(categories, ["Lighting", "Cooling", "Lighting"]);
    }

    #[test]
    fn test_badge_class_is_lowercased_impact() {
        let card = RecommendationCard::from(&rec("Heating", Impact::Medium));

        assert_eq!(card.badge_class(), "impact-medium");
        assert_eq!(card.badge_text(), "Medium Impact");
    }

    #[test]
    fn test_unlisted_impact_is_rendered_as_received() {
        let card = RecommendationCard::from(&rec("Solar", Impact::Other("Very High".to_string())));

        assert_eq!(card.badge_class(), "impact-very-high");
        assert_eq!(card.badge_text(), "Very High Impact");
    }
}
