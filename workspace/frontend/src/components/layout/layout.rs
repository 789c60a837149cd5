use common::Panel;
use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub selected: Panel,
    pub on_select: Callback<Panel>,
    pub on_refresh: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar
                selected={props.selected}
                on_select={props.on_select.clone()}
                on_refresh={props.on_refresh.clone()}
            />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
