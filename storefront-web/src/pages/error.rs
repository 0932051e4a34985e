use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

/// Shown for unknown paths.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="text-center space-y-4 py-16">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p>{i18n.t("error.not_found")}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{i18n.t("error.home")}</Link<Route>>
        </div>
    }
}
