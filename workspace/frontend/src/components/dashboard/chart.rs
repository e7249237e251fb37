use std::rc::Rc;

use yew::prelude::*;

use crate::charts::ChartSlot;
use crate::charts::spec::trend_chart;
use crate::components::chart_mount::ChartMount;

/// Year-long trend, drawn once when the dashboard mounts.
#[function_component(TrendChart)]
pub fn trend_chart_view() -> Html {
    let spec = use_memo((), |_| trend_chart());

    html! {
        <ChartMount slot={ChartSlot::Trend} spec={Some(Rc::clone(&spec))} height={320} />
    }
}
