use yew::prelude::*;

use super::form::PredictionForm;
use super::results::PredictionResults;

#[function_component(Prediction)]
pub fn prediction() -> Html {
    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow xl:col-span-1">
                <div class="card-body">
                    <h2 class="card-title">
                        <i class="fas fa-sliders-h"></i>
                        {"Household Profile"}
                    </h2>
                    <PredictionForm />
                </div>
            </div>
            <div class="xl:col-span-2">
                <PredictionResults />
            </div>
        </div>
    }
}
