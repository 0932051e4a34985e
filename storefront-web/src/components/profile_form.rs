use i18nrs::yew::use_translation;
use shared::models::UserProfile;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::account::save_profile;
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;

/// Form fields in display order; names match [`UserProfile::set_field`].
pub const PROFILE_FIELDS: [&str; 7] = [
    "address_line_1",
    "address_line_2",
    "city",
    "state_province_region",
    "zipcode",
    "country_region",
    "phone",
];

/// Current value of the field called `name`.
pub fn field_value<'a>(profile: &'a UserProfile, name: &str) -> &'a str {
    match name {
        "address_line_1" => &profile.address_line_1,
        "address_line_2" => &profile.address_line_2,
        "city" => &profile.city,
        "state_province_region" => &profile.state_province_region,
        "zipcode" => &profile.zipcode,
        "phone" => &profile.phone,
        "country_region" => &profile.country_region,
        _ => "",
    }
}

/// Shipping profile editor on the dashboard.
#[function_component(ProfileForm)]
pub fn profile_form() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let stored = use_selector(|state: &AppState| (state.account.profile.clone(), state.account.saving));
    let form = use_state(UserProfile::default);
    let (profile, saving) = &*stored;

    {
        let form = form.clone();
        use_effect_with(profile.clone(), move |profile| {
            form.set(profile.clone().unwrap_or_default());
            || ()
        });
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let mut next = (*form).clone();
            if next.set_field(&input.name(), input.value()) {
                form.set(next);
            }
        })
    };
    let on_submit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let edited = (*form).clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                save_profile(&StorefrontClient::shared(), &dispatch, &edited).await;
            });
        })
    };

    html! {
        <form class="card bg-base-200 p-4 space-y-3" onsubmit={on_submit}>
            <h2 class="text-xl font-semibold">{i18n.t("dashboard.profile")}</h2>
            <div class="grid sm:grid-cols-2 gap-3">
                { for PROFILE_FIELDS.iter().map(|&name| html! {
                    <label class="form-control" key={name}>
                        <span class="label-text">{i18n.t(&format!("profile.{name}"))}</span>
                        <input
                            name={name}
                            class="input input-bordered input-sm"
                            value={field_value(&form, name).to_string()}
                            oninput={on_input.clone()}
                            disabled={*saving}
                        />
                    </label>
                }) }
            </div>
            <button type="submit" class="btn btn-primary btn-sm" disabled={*saving || profile.is_none()}>
                { if *saving { i18n.t("profile.saving") } else { i18n.t("profile.save") } }
            </button>
        </form>
    }
}
