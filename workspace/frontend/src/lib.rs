use common::Panel;
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod shared;

use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use components::modeler::Modeler;
use shared::toast::ToastProvider;

#[derive(Properties, PartialEq)]
struct PageProps {
    panel: Panel,
    selected: Panel,
    children: Children,
}

/// Both pages stay mounted; only the selected one carries `active`.
#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    html! {
        <section
            id={props.panel.page_id()}
            class={classes!("page", props.panel.active_class(props.selected))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let selected = use_state(Panel::default);
    let refresh_trigger = use_state(|| 0);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |panel: Panel| {
            log::debug!("Switching to panel: {:?}", panel);
            selected.set(panel);
        })
    };

    let on_refresh = {
        let selected = selected.clone();
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_: ()| {
            log::debug!("Dashboard refresh triggered");
            // Charts are sized on draw, so redraw them visible.
            selected.set(Panel::Dashboard);
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <ToastProvider>
            <Layout selected={*selected} {on_select} {on_refresh}>
                <Page panel={Panel::Dashboard} selected={*selected}>
                    <Dashboard key={*refresh_trigger} />
                </Page>
                <Page panel={Panel::Modeler} selected={*selected}>
                    <Modeler />
                </Page>
            </Layout>
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

    log::info!("=== FraudLens Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
