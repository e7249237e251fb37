use std::rc::Rc;

use yew::prelude::*;

use crate::charts::ChartSlot;
use crate::charts::spec::appliance_chart;
use crate::components::chart_mount::ChartMount;

#[function_component(ApplianceChart)]
pub fn appliance_chart_view() -> Html {
    let spec = use_memo((), |_| appliance_chart());

    html! {
        <ChartMount slot={ChartSlot::Appliance} spec={Some(Rc::clone(&spec))} height={320} />
    }
}
