use yew::prelude::*;
use std::future::Future;
use crate::api_client::ApiError;
use crate::hooks::FetchState;
use crate::shared::toast::ToastContext;

/// Runs `fetch_fn` once on mount. Remount the component (e.g. by changing its
/// `key`) to fetch again.
/// Failures land in the state and, when a toast provider is mounted, as a notification.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(err.to_string());
                        }
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    fetch_state
}
