use common::{GlobalStats, KpiDisplay, PieChart};
use yew::prelude::*;
use crate::api_client::stats::get_global_stats;
use crate::shared::fetch_hook::use_fetch;
use crate::shared::fetch_render::FetchRender;
use super::chart::PlotlyPie;
use super::kpis::KpiCards;

fn render_charts(stats: GlobalStats) -> Html {
    let type_chart = PieChart::transaction_types(stats.charts.type_chart);
    let fraud_chart = PieChart::fraud_split(stats.charts.fraud_chart);

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Transaction Types"}</h2>
                    <PlotlyPie id="type-pie-chart" chart={type_chart} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Fraud vs. Safe"}</h2>
                    <PlotlyPie id="fraud-doughnut-chart" chart={fraud_chart} />
                </div>
            </div>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let stats_state = use_fetch(get_global_stats);

    let kpis = stats_state
        .data()
        .map(|stats| KpiDisplay::from(&stats.kpis))
        .unwrap_or_else(KpiDisplay::placeholder);

    html! {
        <>
            <KpiCards display={kpis} />
            <FetchRender<GlobalStats>
                state={(*stats_state).clone()}
                render={Callback::from(render_charts)}
                loading_text={Some("Loading statistics...".to_string())}
                error_title="Could not load statistics"
            />
        </>
    }
}
