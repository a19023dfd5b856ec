use yew::prelude::*;
use crate::hooks::FetchState;
use super::error::ErrorDisplay;
use super::loading::Loading;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<AttrValue>,
    /// Shown before the first request
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.placeholder == other.placeholder
    }
}

/// Renders a page-owned request state:
/// - NotStarted: optional placeholder
/// - Loading: spinner
/// - Error: error display with optional retry
/// - Success: the render callback
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => match &props.placeholder {
            Some(text) => html! { <p class="text-sm opacity-60 text-center py-12">{text}</p> },
            None => html! {},
        },
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
