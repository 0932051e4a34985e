use i18nrs::yew::use_translation;
use shared::models::CartItem;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::{Dispatch, use_dispatch, use_selector};

use crate::actions::cart::{empty_cart, remove_from_cart, update_quantity};
use crate::api::StorefrontClient;
use crate::components::product_card::format_price;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Quantities offered for a line, capped by stock.
fn quantity_choices(item: &CartItem) -> std::ops::RangeInclusive<u32> {
    1..=item.product.quantity.max(item.count).max(1)
}

fn line(item: &CartItem, dispatch: &Dispatch<AppState>) -> Html {
    let product_id = item.product.id;
    let on_quantity = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            let target: HtmlSelectElement = event.target_unchecked_into();
            let Ok(count) = target.value().parse::<u32>() else {
                return;
            };
            let dispatch = dispatch.clone();
            spawn_local(async move {
                update_quantity(&StorefrontClient::shared(), &dispatch, product_id, count).await;
            });
        })
    };
    let on_remove = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            spawn_local(async move {
                remove_from_cart(&StorefrontClient::shared(), &dispatch, product_id).await;
            });
        })
    };

    html! {
        <li key={product_id} class="flex items-center gap-4 py-3">
            <img src={FrontendConfig::default().media_url(&item.product.photo)} alt={item.product.name.clone()} class="w-16 h-16 rounded object-cover" />
            <Link<Route> to={Route::Product { product_id }} classes="flex-grow link-hover">{&item.product.name}</Link<Route>>
            <select class="select select-bordered select-sm" onchange={on_quantity}>
                { for quantity_choices(item).map(|count| html! {
                    <option value={count.to_string()} selected={count == item.count}>{count}</option>
                }) }
            </select>
            <span class="w-24 text-right">{format_price(item.subtotal())}</span>
            <button type="button" class="btn btn-ghost btn-sm btn-circle" onclick={on_remove}>
                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-5 h-5" />
            </button>
        </li>
    }
}

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let cart = use_selector(|state: &AppState| state.cart.clone());

    let on_empty = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            spawn_local(async move {
                empty_cart(&StorefrontClient::shared(), &dispatch).await;
            });
        })
    };

    if cart.items.is_empty() {
        return html! {
            <div class="text-center space-y-4 py-12">
                <p>{i18n.t("cart.empty")}</p>
                <Link<Route> to={Route::Shop} classes="btn btn-primary">{i18n.t("home.cta")}</Link<Route>>
            </div>
        };
    }

    html! {
        <div class="grid lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2">
                <h1 class="text-2xl font-bold">
                    {format!("{} ({})", i18n.t("cart.title"), cart.total_items)}
                </h1>
                <ul class="divide-y divide-base-300">
                    { for cart.items.iter().map(|item| line(item, &dispatch)) }
                </ul>
                <button type="button" class="btn btn-ghost btn-sm mt-4" onclick={on_empty}>
                    {i18n.t("cart.empty_action")}
                </button>
            </div>
            <div class="card bg-base-200 h-fit">
                <div class="card-body">
                    <h2 class="card-title">{i18n.t("cart.summary")}</h2>
                    if cart.compare_amount > cart.amount {
                        <p class="flex justify-between opacity-70">
                            <span>{i18n.t("cart.list_price")}</span>
                            <span class="line-through">{format_price(cart.compare_amount)}</span>
                        </p>
                    }
                    <p class="flex justify-between font-semibold">
                        <span>{i18n.t("cart.total")}</span>
                        <span>{format_price(cart.amount)}</span>
                    </p>
                </div>
            </div>
        </div>
    }
}
