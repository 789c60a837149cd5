use yew::prelude::*;
use super::predict_form::PredictForm;
use super::recent_table::RecentTransactions;

#[function_component(Modeler)]
pub fn modeler() -> Html {
    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Check a Transaction"}</h2>
                    <PredictForm />
                </div>
            </div>
            <div class="card bg-base-100 shadow xl:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">{"Recent Transactions"}</h2>
                    <RecentTransactions />
                </div>
            </div>
        </div>
    }
}
