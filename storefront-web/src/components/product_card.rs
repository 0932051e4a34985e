use i18nrs::yew::use_translation;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

use crate::actions::cart::add_to_cart;
use super::wishlist_button::WishlistButton;
use crate::api::StorefrontClient;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Price with two decimals, e.g. `$12.50`.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    /// Product to show.
    pub product: Product,
}

/// Grid tile with price, discount, wishlist toggle and add-to-cart.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let product = &props.product;

    let on_add = {
        let product = product.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let product = product.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                add_to_cart(&StorefrontClient::shared(), &dispatch, product).await;
            });
        })
    };

    let to = Route::Product {
        product_id: product.id,
    };
    html! {
        <div class="card bg-base-200 shadow-sm">
            <figure class="aspect-square">
                <img
                    src={FrontendConfig::default().media_url(&product.photo)}
                    alt={product.name.clone()}
                    class="object-cover w-full h-full"
                />
            </figure>
            <div class="card-body p-4">
                <Link<Route> {to} classes="card-title text-base link-hover">{&product.name}</Link<Route>>
                <div class="flex items-baseline gap-2">
                    <span class="font-semibold">{format_price(product.price)}</span>
                    if let Some(percent) = product.discount_percent() {
                        <span class="line-through text-sm opacity-60">{format_price(product.compare_price)}</span>
                        <span class="badge badge-secondary badge-sm">{format!("-{percent}%")}</span>
                    }
                </div>
                <div class="card-actions justify-end items-center">
                    <WishlistButton product_id={product.id} />
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={on_add}
                        disabled={!product.in_stock()}
                    >
                        { if product.in_stock() { i18n.t("product.add_to_cart") } else { i18n.t("product.out_of_stock") } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
