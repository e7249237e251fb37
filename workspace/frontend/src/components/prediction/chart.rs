use std::rc::Rc;

use yew::prelude::*;

use crate::charts::{ChartSlot, ChartSpec};
use crate::components::chart_mount::ChartMount;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub spec: Option<Rc<ChartSpec>>,
    pub revision: u32,
}

/// Forecast bars; rebuilt for every prediction that carries trends.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    html! {
        <ChartMount slot={ChartSlot::Forecast} spec={props.spec.clone()} revision={props.revision} height={320} />
    }
}
