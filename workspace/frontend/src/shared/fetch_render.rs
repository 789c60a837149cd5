use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::LoadingSpinner;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub loading_text: Option<String>,
    #[prop_or(String::from("Something went wrong"))]
    pub error_title: String,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.error_title == other.error_title
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner
/// - Error: shows error display
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Loading => html! { <LoadingSpinner text={props.loading_text.clone()} /> },
        FetchState::Error(err) => {
            html! {
                <ErrorDisplay title={props.error_title.clone()} message={err.to_string()} />
            }
        }
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
