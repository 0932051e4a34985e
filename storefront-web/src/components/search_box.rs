use i18nrs::yew::use_translation;
use shared::models::{ALL_CATEGORIES, Category, SearchQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::{
    Callback, Event, Html, InputEvent, Properties, SubmitEvent, TargetCast, function_component, html, use_state,
};
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::search::submit_search;
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;

/// Set the form field called `name` from its raw input value.
///
/// Unknown names are ignored and a category that does not parse selects
/// every category.
pub fn update_field(query: &mut SearchQuery, name: &str, value: &str) {
    match name {
        "search" => value.clone_into(&mut query.search),
        "category_id" => query.category_id = value.parse().unwrap_or(ALL_CATEGORIES),
        other => log::debug!("ignoring unknown search field {other}"),
    }
}

/// Select options for the category filter, sub-categories indented under
/// their parent.
pub fn category_options(categories: &[Category]) -> Vec<(i64, String)> {
    Category::flatten(categories)
        .into_iter()
        .map(|(depth, category)| (category.id, format!("{}{}", "\u{a0}\u{a0}".repeat(depth), category.name)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    /// Query the form starts with, e.g. the search being shown.
    #[prop_or_default]
    pub initial: Option<SearchQuery>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let categories = use_selector(|state: &AppState| state.catalog.categories.clone());
    let query = {
        let initial = props.initial.clone();
        use_state(move || initial.unwrap_or_default())
    };

    let on_change = {
        let query = query.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*query).clone();
            update_field(&mut next, &name, &value);
            query.set(next);
        })
    };

    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |event: InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_change.emit((target.name(), target.value()));
        })
    };

    let on_select = Callback::from(move |event: Event| {
        let target: HtmlSelectElement = event.target_unchecked_into();
        on_change.emit((target.name(), target.value()));
    });

    let on_submit = {
        let query = query.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let query = (*query).clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let api = StorefrontClient::shared();
                submit_search(&api, &dispatch, query, |route| match navigator {
                    Some(navigator) => navigator.push(&route),
                    None => log::error!("no router available for search navigation"),
                })
                .await;
            });
        })
    };

    let selected = query.category_id;
    html! {
        <form class="join w-full max-w-xl" onsubmit={on_submit}>
            <select
                name="category_id"
                class="select select-bordered select-sm join-item max-w-40"
                onchange={on_select}
            >
                <option value={ALL_CATEGORIES.to_string()} selected={selected == ALL_CATEGORIES}>
                    {i18n.t("search.all_categories")}
                </option>
                { for category_options(&categories).into_iter().map(|(id, label)| html! {
                    <option value={id.to_string()} selected={selected == id}>{label}</option>
                }) }
            </select>
            <input
                type="search"
                name="search"
                class="input input-bordered input-sm join-item w-full"
                placeholder={i18n.t("search.placeholder")}
                value={query.search.clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary btn-sm join-item" aria-label={i18n.t("search.submit")}>
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4" />
            </button>
        </form>
    }
}
