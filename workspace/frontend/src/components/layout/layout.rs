use yew::prelude::*;

use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub active: Section,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="app-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar title={props.active.title()} />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar active={props.active} />
        </div>
    }
}
