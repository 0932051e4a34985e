use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector, use_selector_with_deps};

use super::shop::product_grid;
use crate::actions::cart::add_to_cart;
use crate::actions::products::load_product;
use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_card::format_price;
use crate::components::review_form::ReviewForm;
use crate::components::wishlist_button::WishlistButton;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    /// Product to show, from the route.
    pub product_id: i64,
}

/// One product with its relatives and, for signed-in users, their review.
#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let product_id = props.product_id;
    let detail = use_selector_with_deps(
        |state: &AppState, product_id: &i64| {
            (
                state.products.product(*product_id).cloned(),
                state.products.related.clone(),
                state.products.detail_loading,
            )
        },
        product_id,
    );
    let in_cart = use_selector_with_deps(
        |state: &AppState, product_id: &i64| state.cart.count_of(*product_id),
        product_id,
    );
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated);

    {
        let dispatch = dispatch.clone();
        use_effect_with((product_id, *is_authenticated), move |&(product_id, _)| {
            spawn_local(async move {
                load_product(&StorefrontClient::shared(), &dispatch, product_id).await;
            });
            || ()
        });
    }

    let (product, related, loading) = &*detail;
    let Some(loaded) = product.clone() else {
        return if *loading {
            html! { <Loading /> }
        } else {
            html! { <p class="opacity-70">{i18n.t("product.not_found")}</p> }
        };
    };

    let on_add = {
        let loaded = loaded.clone();
        Callback::from(move |_: MouseEvent| {
            let loaded = loaded.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                add_to_cart(&StorefrontClient::shared(), &dispatch, loaded).await;
            });
        })
    };

    html! {
        <div class="space-y-10">
            <div class="grid md:grid-cols-2 gap-8">
                <img
                    src={FrontendConfig::default().media_url(&loaded.photo)}
                    alt={loaded.name.clone()}
                    class="rounded-box w-full object-cover"
                />
                <div class="space-y-4">
                    <div class="flex items-center gap-2">
                        <h1 class="text-3xl font-bold">{&loaded.name}</h1>
                        <WishlistButton product_id={loaded.id} />
                    </div>
                    <div class="flex items-baseline gap-3">
                        <span class="text-2xl font-semibold">{format_price(loaded.price)}</span>
                        if loaded.discount_percent().is_some() {
                            <span class="line-through opacity-60">{format_price(loaded.compare_price)}</span>
                        }
                    </div>
                    <p>{&loaded.description}</p>
                    <p class="text-sm opacity-70">
                        { if loaded.in_stock() {
                            format!("{} {}", loaded.quantity, i18n.t("product.in_stock"))
                        } else {
                            i18n.t("product.out_of_stock")
                        } }
                    </p>
                    if *in_cart > 0 {
                        <p class="text-sm">{format!("{} {}", *in_cart, i18n.t("product.in_cart"))}</p>
                    }
                    <button class="btn btn-primary" onclick={on_add} disabled={!loaded.in_stock()}>
                        {i18n.t("product.add_to_cart")}
                    </button>
                    if *is_authenticated {
                        <ReviewForm product_id={loaded.id} />
                    }
                </div>
            </div>
            if !related.is_empty() {
                <section class="space-y-4">
                    <h2 class="text-xl font-semibold">{i18n.t("product.related")}</h2>
                    {product_grid(related)}
                </section>
            }
        </div>
    }
}
