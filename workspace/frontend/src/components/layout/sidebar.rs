use yew::prelude::*;
use yew_router::prelude::*;

use crate::navigation::{Section, nav_items};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Section,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-success flex items-center justify-center text-success-content font-bold text-2xl">
                            <i class="fas fa-leaf"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"EcoWatt AI"}</span>
                    </div>
                </li>

                {for nav_items(props.active).into_iter().map(|item| {
                    let section = item.section;
                    html! {
                        <li key={section.id()} class={classes!(item.classes())} data-section={section.id()}>
                            <Link<Route>
                                to={Route::from(section)}
                                classes={classes!(item.active.then_some("active"))}
                            >
                                <span class="flex items-center gap-3">
                                    <i class={classes!(section.icon(), "w-5")}></i>
                                    {section.label()}
                                </span>
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
