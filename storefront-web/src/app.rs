use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::YewduxRoot;
use yewdux::prelude::use_dispatch;

use crate::actions::session::check_session;
use crate::api::StorefrontClient;
use crate::language::{self, DEFAULT_LANGUAGE};
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};

/// Router and start-up session check. Must be mounted under [`Root`].
#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    use_effect_with((), move |()| {
        spawn_local(async move {
            check_session(&StorefrontClient::shared(), &dispatch).await;
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Store and translation providers around [`App`].
#[function_component(Root)]
pub fn root() -> Html {
    let config = I18nProviderConfig {
        translations: language::translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "app_test.rs"]
mod app_test;
