use common::KpiDisplay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub display: KpiDisplay,
}

#[derive(Properties, PartialEq)]
struct KpiCardProps {
    id: &'static str,
    title: &'static str,
    value: String,
    #[prop_or_default]
    value_class: Option<&'static str>,
}

#[function_component(KpiCard)]
fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{props.title}</div>
                <div id={props.id} class={classes!("stat-value", props.value_class)}>{&props.value}</div>
            </div>
        </div>
    }
}

#[function_component(KpiCards)]
pub fn kpi_cards(props: &Props) -> Html {
    let display = &props.display;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <KpiCard id="kpi-total-tx" title="Total Transactions" value={display.total_transactions.clone()} />
            <KpiCard id="kpi-total-volume" title="Total Volume" value={display.total_volume.clone()} value_class={Some("text-primary")} />
            <KpiCard id="kpi-total-fraud" title="Fraud Transactions" value={display.total_fraud.clone()} value_class={Some("text-error")} />
            <KpiCard id="kpi-fraud-rate" title="Fraud Rate" value={display.fraud_rate.clone()} value_class={Some("text-warning")} />
        </div>
    }
}
