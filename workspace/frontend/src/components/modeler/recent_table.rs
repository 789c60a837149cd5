use common::TransactionRow;
use yew::prelude::*;
use crate::api_client::transactions::get_recent_transactions;
use crate::hooks::FetchState;
use crate::shared::fetch_hook::use_fetch;

/// Single row spanning the whole table, used while loading and on failure.
fn placeholder_row(text: &'static str) -> Html {
    html! {
        <tr>
            <td colspan={TransactionRow::COLUMNS.to_string()} class="text-center text-gray-500">{text}</td>
        </tr>
    }
}

fn transaction_row(row: &TransactionRow) -> Html {
    html! {
        <tr class={classes!("hover", row.class())}>
            { for row.cells.iter().map(|cell| html! { <td>{cell}</td> }) }
        </tr>
    }
}

#[function_component(RecentTransactions)]
pub fn recent_transactions() -> Html {
    let fetch_state = use_fetch(get_recent_transactions);

    let body = match &*fetch_state {
        FetchState::Loading => placeholder_row(TransactionRow::LOADING_TEXT),
        FetchState::Error(_) => placeholder_row(TransactionRow::ERROR_TEXT),
        FetchState::Success(records) => {
            let rows = TransactionRow::from_records(records);
            log::debug!("Rendering {} transaction rows", rows.len());
            html! { <>{ for rows.iter().map(transaction_row) }</> }
        }
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Sender"}</th>
                        <th>{"Receiver"}</th>
                        <th>{"Fraud"}</th>
                    </tr>
                </thead>
                <tbody id="transactions-table-body">
                    {body}
                </tbody>
            </table>
        </div>
    }
}
