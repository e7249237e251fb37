//! Page-session state owned by the app root.

use std::rc::Rc;

use ecowatt_common::PredictionResponse;
use yew::prelude::*;

use crate::charts::ChartSpec;
use crate::charts::spec::forecast_chart;
use crate::display::{DashboardSummary, PredictionDisplay, RecommendationCard, recommendation_cards};

/// Everything the prediction panel shows for one successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub display: PredictionDisplay,
    pub recommendations: Vec<RecommendationCard>,
    /// `None` when the response carried no trends: the forecast chart is left as is.
    pub forecast: Option<Rc<ChartSpec>>,
}

impl From<&PredictionResponse> for PredictionView {
    fn from(response: &PredictionResponse) -> Self {
        Self {
            display: PredictionDisplay::from(response),
            recommendations: recommendation_cards(&response.recommendations),
            forecast: response.trends.as_deref().map(|trends| Rc::new(forecast_chart(trends))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub summary: DashboardSummary,
    /// Latest successful prediction; `None` keeps the results panel hidden.
    pub latest: Option<Rc<PredictionView>>,
    /// Number of successful predictions this session.
    pub predictions: u32,
}

pub enum DashboardAction {
    PredictionReceived(PredictionResponse),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::PredictionReceived(response) => {
                log::debug!("Applying prediction #{} to dashboard", self.predictions + 1);
                Rc::new(Self {
                    summary: DashboardSummary::from(&response),
                    latest: Some(Rc::new(PredictionView::from(&response))),
                    predictions: self.predictions + 1,
                })
            }
        }
    }
}

pub type DashboardStore = UseReducerHandle<DashboardState>;
