use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, Redirect};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::session::login;
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let session = use_selector(|state: &AppState| {
        (state.session.is_authenticated, state.session.loading)
    });
    let email = use_state(String::new);
    let password = use_state(String::new);
    let (is_authenticated, busy) = *session;

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = (*email).clone();
            let password = (*password).clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                login(&StorefrontClient::shared(), &dispatch, email, password).await;
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    if is_authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let disable_submit = email.is_empty() || password.is_empty() || busy;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-200">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{i18n.t("login.email")}</span>
                        </label>
                        <input
                            id="email"
                            name="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{i18n.t("login.password")}</span>
                        </label>
                        <input
                            id="password"
                            name="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                        </button>
                    </div>
                    <p class="text-sm mt-2">
                        {i18n.t("login.no_account")}{" "}
                        <Link<Route> to={Route::Signup} classes="link link-primary">{i18n.t("nav.signup")}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
