use std::rc::Rc;

use yew::prelude::*;

use crate::bindings::ViewBindings;
use crate::charts::{ChartSlot, ChartSpec, ChartsHandle};

#[derive(Properties, PartialEq)]
pub struct ChartMountProps {
    pub slot: ChartSlot,
    /// `None` renders the empty mount and leaves any live chart untouched.
    pub spec: Option<Rc<ChartSpec>>,
    /// Bumped to force a rebuild even when the new spec equals the current one.
    #[prop_or_default]
    pub revision: u32,
    #[prop_or(300)]
    pub height: u32,
}

/// Mount point for one chart slot.
///
/// Every time `spec` or `revision` changes the registry replaces the slot's chart;
/// unmounting disposes it.
#[function_component(ChartMount)]
pub fn chart_mount(props: &ChartMountProps) -> Html {
    let bindings = use_context::<ViewBindings>().expect("ViewBindings context missing");
    let charts = use_context::<ChartsHandle>().expect("ChartsHandle context missing");
    let slot = props.slot;

    {
        let bindings = bindings.clone();
        let charts = charts.clone();
        use_effect_with((props.spec.clone(), props.revision), move |(spec, _)| {
            if let Some(spec) = spec {
                match bindings.resolve(slot) {
                    Ok(target) => {
                        if let Err(e) = charts.replace(slot, &target, spec) {
                            log::error!("Failed to render {} chart: {}", slot, e);
                        }
                    }
                    Err(e) => log::warn!("Skipping {} chart: {}", slot, e),
                }
            } else {
                log::trace!("No data for {} chart yet", slot);
            }
            || ()
        });
    }

    {
        let charts = charts.clone();
        use_effect_with(slot, move |slot| {
            let slot = *slot;
            move || {
                charts.dispose(slot);
            }
        });
    }

    html! {
        <div
            ref={bindings.node_ref(slot).clone()}
            id={slot.mount_id()}
            class="chart-container"
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}
