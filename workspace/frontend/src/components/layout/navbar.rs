use common::Panel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: Panel,
    pub on_select: Callback<Panel>,
    pub on_refresh: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <i class="fas fa-user-shield text-2xl text-primary"></i>
                <h1 class="text-xl font-bold" id="page-title">{ props.selected.title() }</h1>
            </div>
            <div class="flex-none gap-2">
                { for Panel::ALL.iter().map(|panel| {
                    let panel = *panel;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(panel))
                    };
                    html! {
                        <button
                            id={panel.button_id()}
                            class={classes!("btn", "btn-ghost", "nav-btn", panel.active_class(props.selected))}
                            {onclick}
                        >
                            {panel.title()}
                        </button>
                    }
                }) }
                <button class="btn btn-ghost btn-circle" title="Refresh dashboard" onclick={on_refresh}>
                    <i class="fas fa-sync-alt"></i>
                </button>
            </div>
        </div>
    }
}
