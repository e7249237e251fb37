use yew::prelude::*;

use super::chart::TrendChart;
use super::stats::Stats;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <>
            <Stats />
            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Consumption Trend (Current vs AI Optimized)"}</h2>
                    <TrendChart />
                </div>
            </div>
        </>
    }
}
