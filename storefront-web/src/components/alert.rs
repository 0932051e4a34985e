use gloo_timers::callback::Timeout;
use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::models::app_state::{AppState, ClearErrors};

/// How long an error stays on screen.
const DISMISS_AFTER_MS: u32 = 5_000;

/// Transient banner for the first pending error in the store.
#[function_component(Alert)]
pub fn alert() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let message = use_selector(|state: &AppState| state.first_error().map(str::to_string));

    use_effect_with(message.clone(), move |message| {
        let timeout = message
            .is_some()
            .then(|| Timeout::new(DISMISS_AFTER_MS, move || dispatch.apply(ClearErrors)));
        move || drop(timeout)
    });

    let Some(message) = (*message).clone() else {
        return html! {};
    };
    html! {
        <div class="toast toast-top toast-center z-50">
            <div role="alert" class="alert alert-error">
                <span>{message}</span>
            </div>
        </div>
    }
}
