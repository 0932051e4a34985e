use i18nrs::yew::use_translation;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::products::load_products;
use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_card::ProductCard;
use crate::models::app_state::AppState;

/// Product grid shared by the shop, search, product and wishlist pages.
pub(crate) fn product_grid(products: &[Product]) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
            { for products.iter().map(|product| html! {
                <ProductCard key={product.id} product={product.clone()} />
            }) }
        </div>
    }
}

/// The full catalog. Load failures surface in the alert banner.
#[function_component(ShopPage)]
pub fn shop_page() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let listing = use_selector(|state: &AppState| {
        (state.products.listing.clone(), state.products.listing_loading)
    });

    use_effect_with((), move |()| {
        spawn_local(async move {
            load_products(&StorefrontClient::shared(), &dispatch).await;
        });
        || ()
    });

    let body = match &*listing {
        (None, true) => html! { <Loading /> },
        (None, false) => html! { <p class="opacity-70">{i18n.t("shop.unavailable")}</p> },
        (Some(list), _) if list.is_empty() => html! { <p>{i18n.t("shop.empty")}</p> },
        (Some(list), _) => product_grid(list),
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{i18n.t("shop.title")}</h1>
            {body}
        </div>
    }
}
