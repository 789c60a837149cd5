use yew::prelude::*;
use crate::settings;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

/// Error notifications for panels that have no inline error surface.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
}

impl ToastContext {
    pub fn show_error(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0usize);
    let update = use_force_update();

    let add_toast = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        let update = update.clone();

        Callback::from(move |message: String| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id += 1;
                id
            };

            toasts.borrow_mut().push(Toast { id, message });
            update.force_update();

            let duration = settings::get_settings().toast_duration_ms;
            let toasts = toasts.clone();
            let update = update.clone();
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                toasts.borrow_mut().retain(|t| t.id != id);
                update.force_update();
            });
            timeout_handle.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        let update = update.clone();

        Callback::from(move |id: usize| {
            toasts.borrow_mut().retain(|t| t.id != id);
            update.force_update();
        })
    };

    let current = toasts.borrow().clone();
    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for current.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class="alert alert-error shadow-lg">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
