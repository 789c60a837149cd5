use common::{PredictionMessage, PredictionRequest, ResultRegion, TransactionType};
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use crate::api_client::prediction::predict_fraud;

/// Reads the four form fields as typed; validation is left to the browser.
fn read_request(form: &HtmlFormElement) -> Result<PredictionRequest, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

    Ok(PredictionRequest {
        sender_id: field("sender_id"),
        receiver_id: field("receiver_id"),
        kind: field("type"),
        amount: field("amount"),
    })
}

#[derive(Properties, PartialEq)]
struct ResultMessageProps {
    region: ResultRegion,
}

#[function_component(ResultMessage)]
fn result_message(props: &ResultMessageProps) -> Html {
    match props.region.message() {
        None => html! {
            <div id="result-message" class="result" style="display: none;"></div>
        },
        Some(message) => html! {
            <div id="result-message" class={message.class()} style="display: block;">
                {message.text()}
            </div>
        },
    }
}

#[function_component(PredictForm)]
pub fn predict_form() -> Html {
    let form_ref = use_node_ref();
    let region = use_state(ResultRegion::default);

    let on_submit = {
        let form_ref = form_ref.clone();
        let region = region.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if region.is_pending() {
                log::debug!("Prediction already in flight, ignoring submit");
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let request = match read_request(&form) {
                Ok(request) => request,
                Err(e) => {
                    log::error!("Error reading prediction form: {:?}", e);
                    region.set(ResultRegion::Resolved(PredictionMessage::Failed));
                    return;
                }
            };

            // Shown before the request is dispatched.
            region.set(ResultRegion::Pending);

            let region = region.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = predict_fraud(&request).await;
                if let Err(ref e) = outcome {
                    log::error!("Error during prediction: {}", e);
                }
                region.set(ResultRegion::resolved(&outcome));
            });
        })
    };

    let pending = region.is_pending();

    html! {
        <>
            <form ref={form_ref} id="predict-form" class="flex flex-col gap-4" onsubmit={on_submit}>
                <label class="form-control w-full">
                    <div class="label"><span class="label-text">{"Sender ID"}</span></div>
                    <input type="text" name="sender_id" class="input input-bordered w-full" placeholder="C1231006815" required={true} />
                </label>
                <label class="form-control w-full">
                    <div class="label"><span class="label-text">{"Receiver ID"}</span></div>
                    <input type="text" name="receiver_id" class="input input-bordered w-full" placeholder="M1979787155" required={true} />
                </label>
                <label class="form-control w-full">
                    <div class="label"><span class="label-text">{"Type"}</span></div>
                    <select name="type" class="select select-bordered w-full">
                        { for TransactionType::ALL.iter().map(|kind| html! {
                            <option value={kind.as_str()}>{kind.label()}</option>
                        }) }
                    </select>
                </label>
                <label class="form-control w-full">
                    <div class="label"><span class="label-text">{"Amount"}</span></div>
                    <input type="number" name="amount" class="input input-bordered w-full" step="0.01" min="0" required={true} />
                </label>
                <button type="submit" class="btn btn-primary" disabled={pending}>
                    {if pending {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-shield-alt"></i> }
                    }}
                    {" Check Transaction"}
                </button>
            </form>
            <ResultMessage region={(*region).clone()} />
        </>
    }
}
