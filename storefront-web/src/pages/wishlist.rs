use i18nrs::yew::use_translation;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::{use_dispatch, use_selector};

use super::shop::product_grid;
use crate::actions::wishlist::sync_wishlist;
use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::models::app_state::AppState;

/// Products the signed-in user saved. Only reachable through the route guard.
#[function_component(WishlistPage)]
pub fn wishlist_page() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let wishlist = use_selector(|state: &AppState| {
        let products: Vec<Product> = state.wishlist.items.iter().map(|item| item.product.clone()).collect();
        (products, state.wishlist.loading)
    });
    let epoch = use_selector(|state: &AppState| state.session.is_authenticated.then_some(state.session.epoch));

    use_effect_with(*epoch, move |&epoch| {
        if let Some(epoch) = epoch {
            spawn_local(async move {
                sync_wishlist(&StorefrontClient::shared(), &dispatch, epoch).await;
            });
        }
        || ()
    });

    let (products, loading) = &*wishlist;
    let body = if products.is_empty() && *loading {
        html! { <Loading /> }
    } else if products.is_empty() {
        html! { <p class="opacity-70">{i18n.t("wishlist.empty")}</p> }
    } else {
        product_grid(products)
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">
                {format!("{} ({} {})", i18n.t("wishlist.title"), products.len(), i18n.t("wishlist.count"))}
            </h1>
            {body}
        </div>
    }
}
