use yew::prelude::*;

use crate::store::DashboardStore;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    id: AttrValue,
    title: AttrValue,
    value: String,
    icon: AttrValue,
    value_class: AttrValue,
    #[prop_or_default]
    description: Option<AttrValue>,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure text-base-content/40">
                    <i class={classes!(props.icon.to_string(), "text-2xl")}></i>
                </div>
                <div class="stat-title">{&props.title}</div>
                <div id={props.id.clone()} class={classes!("stat-value", "text-2xl", props.value_class.to_string())}>
                    {&props.value}
                </div>
                if let Some(description) = &props.description {
                    <div class="stat-desc">{description}</div>
                }
            </div>
        </div>
    }
}

/// The four summary fields, refreshed by every successful prediction.
#[function_component(Stats)]
pub fn stats() -> Html {
    let store = use_context::<DashboardStore>().expect("DashboardStore context missing");
    let summary = &store.summary;

    let description = if store.predictions == 0 {
        Some(AttrValue::from("Run a prediction to update"))
    } else {
        None
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <StatCard
                id="current-consumption"
                title="Current Consumption"
                value={summary.current_consumption.clone()}
                icon="fas fa-bolt"
                value_class="text-primary"
                description={description.clone()}
            />
            <StatCard
                id="monthly-bill"
                title="Monthly Bill"
                value={summary.monthly_bill.clone()}
                icon="fas fa-file-invoice"
                value_class="text-error"
                description={description.clone()}
            />
            <StatCard
                id="carbon-footprint"
                title="Carbon Footprint"
                value={summary.carbon_footprint.clone()}
                icon="fas fa-smog"
                value_class="text-warning"
                description={description.clone()}
            />
            <StatCard
                id="efficiency-score"
                title="Efficiency Score"
                value={summary.efficiency_score.clone()}
                icon="fas fa-leaf"
                value_class="text-success"
                description={description}
            />
        </div>
    }
}
