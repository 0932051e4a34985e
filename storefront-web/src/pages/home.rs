use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <section class="hero min-h-[50vh] bg-base-200 rounded-box">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{i18n.t("home.title")}</h1>
                    <p>{i18n.t("home.subtitle")}</p>
                    <Link<Route> to={Route::Shop} classes="btn btn-primary">{i18n.t("home.cta")}</Link<Route>>
                </div>
            </div>
        </section>
    }
}
