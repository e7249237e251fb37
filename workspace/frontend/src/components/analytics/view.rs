use yew::prelude::*;

use super::chart::ApplianceChart;
use crate::charts::spec::{APPLIANCE_SHARES, OPTIMIZATION_FACTOR};

#[function_component(Analytics)]
pub fn analytics() -> Html {
    let potential = ((1.0 - OPTIMIZATION_FACTOR) * 100.0).round();

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Appliance Breakdown"}</h2>
                    <ApplianceChart />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Where the Energy Goes"}</h2>
                    <ul class="space-y-2">
                        {for APPLIANCE_SHARES.iter().map(|(label, share, color)| html! {
                            <li class="flex items-center gap-3">
                                <span class="w-3 h-3 rounded-full" style={format!("background-color: {};", color)}></span>
                                <span class="flex-1">{*label}</span>
                                <span class="font-semibold">{format!("{}%", share)}</span>
                            </li>
                        })}
                    </ul>
                    <div class="alert alert-success mt-4">
                        <i class="fas fa-lightbulb"></i>
                        <span>{format!("Following the AI recommendations can cut consumption by about {}%.", potential)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
