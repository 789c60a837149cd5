use common::PieChart;
use plotly::common::Orientation;
use plotly::configuration::DisplayModeBar;
use plotly::layout::{Legend, Margin};
use plotly::{Configuration, Layout};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(root: &HtmlElement, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(root: &HtmlElement) -> Result<JsValue, JsValue>;
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Releases the Plotly instance attached to `element`, if any.
fn destroy(element: &HtmlElement) {
    if let Err(e) = purge(element) {
        log::debug!("Plotly purge failed for #{}: {:?}", element.id(), e);
    }
}

fn draw(element: &HtmlElement, chart: &PieChart) -> Result<(), JsValue> {
    // A container holds at most one chart instance.
    destroy(element);

    let layout = Layout::new()
        .height(300)
        .margin(Margin::new().top(10).bottom(10).left(10).right(10))
        .legend(Legend::new().orientation(Orientation::Horizontal).y(1.15))
        .paper_background_color("rgba(0,0,0,0)");
    let config = Configuration::new()
        .responsive(true)
        .display_mode_bar(DisplayModeBar::False);

    new_plot(element, to_js(&chart.traces())?, to_js(&layout)?, to_js(&config)?)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub chart: PieChart,
}

#[function_component(PlotlyPie)]
pub fn plotly_pie(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.chart.clone()), move |(container_ref, chart)| {
        let element = container_ref.cast::<HtmlElement>();
        if let Some(element) = &element {
            log::trace!("Drawing chart #{}", element.id());
            if let Err(e) = draw(element, chart) {
                log::error!("Failed to draw chart '{}': {:?}", chart.name, e);
            }
        }
        move || {
            if let Some(element) = element {
                destroy(&element);
            }
        }
    });

    if props.chart.series.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-chart-pie text-4xl mb-4 opacity-50"></i>
                <p>{"No data available."}</p>
            </div>
        };
    }

    html! {
        <div ref={container_ref} id={props.id.clone()} class="chart-container" style="height: 300px;"></div>
    }
}
