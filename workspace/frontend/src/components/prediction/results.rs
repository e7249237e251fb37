use yew::prelude::*;

use super::chart::ForecastChart;
use super::recommendations::Recommendations;
use crate::store::DashboardStore;

#[derive(Properties, PartialEq)]
struct ResultFieldProps {
    id: AttrValue,
    label: AttrValue,
    value: String,
    icon: AttrValue,
}

#[function_component(ResultField)]
fn result_field(props: &ResultFieldProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-figure text-primary">
                <i class={classes!(props.icon.to_string(), "text-xl")}></i>
            </div>
            <div class="stat-title">{&props.label}</div>
            <div id={props.id.clone()} class="stat-value text-xl">{&props.value}</div>
        </div>
    }
}

/// Results panel, hidden until the first successful prediction.
///
/// The forecast mount stays in the DOM while hidden so the chart registry always
/// has a target to draw on.
#[function_component(PredictionResults)]
pub fn prediction_results() -> Html {
    let store = use_context::<DashboardStore>().expect("DashboardStore context missing");
    let latest = store.latest.clone();

    let style = if latest.is_some() { "display: block;" } else { "display: none;" };
    let forecast = latest.as_ref().and_then(|view| view.forecast.clone());

    html! {
        <div id="predictionResults" style={style} class="space-y-6">
            if let Some(view) = latest.as_ref() {
                <div class="stats stats-vertical lg:stats-horizontal shadow bg-base-100 w-full">
                    <ResultField id="consumptionResult" label="Predicted Consumption"
                        value={view.display.consumption.clone()} icon="fas fa-bolt" />
                    <ResultField id="confidenceLevel" label="Confidence"
                        value={view.display.confidence.clone()} icon="fas fa-bullseye" />
                    <ResultField id="billResult" label="Estimated Bill"
                        value={view.display.bill.clone()} icon="fas fa-file-invoice" />
                    <ResultField id="savingsResult" label="Monthly Savings"
                        value={view.display.savings.clone()} icon="fas fa-piggy-bank" />
                    <ResultField id="carbonResult" label="Carbon Footprint"
                        value={view.display.carbon.clone()} icon="fas fa-smog" />
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"AI Recommendations"}</h3>
                        <Recommendations cards={view.recommendations.clone()} />
                    </div>
                </div>
            }

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Consumption Forecast"}</h3>
                    <ForecastChart spec={forecast} revision={store.predictions} />
                </div>
            </div>
        </div>
    }
}
