use i18nrs::yew::use_translation;
use shared::models::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, Redirect};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::session::signup;
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Set the sign-up field called `name`.
fn update_field(form: &mut SignupRequest, name: &str, value: String) {
    match name {
        "email" => form.email = value,
        "first_name" => form.first_name = value,
        "last_name" => form.last_name = value,
        "password" => form.password = value,
        "re_password" => form.re_password = value,
        other => log::debug!("ignoring unknown signup field {other}"),
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated);
    let form = use_state(SignupRequest::default);
    let created = use_state(|| false);
    let busy = use_state(|| false);

    let oninput = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                update_field(&mut next, &input.name(), input.value());
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let created = created.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = (*form).clone();
            let dispatch = dispatch.clone();
            let created = created.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let ok = signup(&StorefrontClient::shared(), &dispatch, &request).await;
                busy.set(false);
                created.set(ok);
            });
        })
    };

    if *is_authenticated {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }
    if *created {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let field = |name: &'static str, kind: &'static str, value: &str| {
        html! {
            <div class="form-control">
                <label class="label" for={name}>
                    <span class="label-text">{i18n.t(&format!("signup.{name}"))}</span>
                </label>
                <input
                    id={name}
                    {name}
                    type={kind}
                    class="input input-bordered"
                    required=true
                    value={value.to_string()}
                    oninput={oninput.clone()}
                />
            </div>
        }
    };

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-200">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("signup.title")}</h2>
                    {field("first_name", "text", &form.first_name)}
                    {field("last_name", "text", &form.last_name)}
                    {field("email", "email", &form.email)}
                    {field("password", "password", &form.password)}
                    {field("re_password", "password", &form.re_password)}
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            {i18n.t("signup.submit")}
                        </button>
                    </div>
                    <p class="text-sm mt-2">
                        {i18n.t("signup.have_account")}{" "}
                        <Link<Route> to={Route::Login} classes="link link-primary">{i18n.t("nav.login")}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
