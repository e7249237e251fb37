use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod bindings;
pub mod charts;
pub mod common;
pub mod display;
pub mod form;
pub mod hooks;
pub mod navigation;
pub mod router;
pub mod settings;
pub mod store;

use bindings::ViewBindings;
use charts::ChartsHandle;
use charts::plotly::PlotlyBackend;
use common::toast::ToastProvider;
use components::analytics::Analytics;
use components::dashboard::Dashboard;
use components::layout::Layout;
use components::prediction::Prediction;
use navigation::Section;
use router::Route;
use store::{DashboardState, DashboardStore};

#[derive(Properties, PartialEq)]
struct SectionPanelProps {
    section: Section,
    active: Section,
    children: Children,
}

/// Wrapper of one content section. Every section stays mounted; only the active one
/// is visible.
#[function_component(SectionPanel)]
fn section_panel(props: &SectionPanelProps) -> Html {
    let active = props.section == props.active;

    html! {
        <section
            id={props.section.element_id()}
            class={classes!("content-section", if active { "active" } else { "hidden" })}
        >
            { for props.children.iter() }
        </section>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Dashboard);
    let active = route.section();
    let charts = use_context::<ChartsHandle>().expect("ChartsHandle context missing");

    use_effect_with(active, move |active| {
        log::debug!("Showing {} section", active.id());
        // Charts drawn while their section was hidden need to pick up the real size.
        charts.resize_all();
        || ()
    });

    html! {
        <Layout active={active}>
            <SectionPanel section={Section::Dashboard} active={active}>
                <Dashboard />
            </SectionPanel>
            <SectionPanel section={Section::Prediction} active={active}>
                <Prediction />
            </SectionPanel>
            <SectionPanel section={Section::Analytics} active={active}>
                <Analytics />
            </SectionPanel>
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store: DashboardStore = use_reducer(DashboardState::default);
    let charts = use_state(|| ChartsHandle::new(PlotlyBackend));
    let bindings = use_state(ViewBindings::default);

    html! {
        <ToastProvider>
            <ContextProvider<DashboardStore> context={store}>
                <ContextProvider<ChartsHandle> context={(*charts).clone()}>
                    <ContextProvider<ViewBindings> context={(*bindings).clone()}>
                        <BrowserRouter>
                            <Shell />
                        </BrowserRouter>
                    </ContextProvider<ViewBindings>>
                </ContextProvider<ChartsHandle>>
            </ContextProvider<DashboardStore>>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== EcoWatt AI Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
