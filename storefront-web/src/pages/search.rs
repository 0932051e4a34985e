use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

use super::shop::product_grid;
use crate::components::loading::Loading;
use crate::components::search_box::SearchBox;
use crate::models::app_state::AppState;

/// Results of the last submitted search.
#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let (i18n, ..) = use_translation();
    let search = use_selector(|state: &AppState| state.search.clone());

    let body = match search.query.as_ref() {
        None => html! { <p>{i18n.t("search.prompt")}</p> },
        Some(_) if search.loading => html! { <Loading /> },
        Some(_) if search.results.is_empty() => html! { <p>{i18n.t("search.no_results")}</p> },
        Some(_) => product_grid(&search.results),
    };

    html! {
        <div class="space-y-6">
            <SearchBox initial={search.query.clone()} />
            if let Some(query) = search.query.as_ref() {
                <h1 class="text-2xl font-bold">
                    {format!("{} \"{}\" ({})", i18n.t("search.results_for"), query.search, search.results.len())}
                </h1>
            }
            {body}
        </div>
    }
}
