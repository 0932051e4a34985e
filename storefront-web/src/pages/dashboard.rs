use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector};

use super::orders::OrdersTable;
use crate::actions::account::load_account;
use crate::actions::session::refresh_user;
use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_card::format_price;
use crate::components::profile_form::ProfileForm;
use crate::models::app_state::AppState;
use crate::routes::Route;

#[function_component(DashboardStats)]
fn dashboard_stats() -> Html {
    let (i18n, _) = use_translation();
    let totals = use_selector(|state: &AppState| {
        (state.cart.total_items, state.cart.amount, state.wishlist.total_items)
    });
    let (cart_items, amount, saved) = *totals;
    html! {
        <div class="stats shadow w-full">
            <div class="stat">
                <div class="stat-figure text-primary">
                    <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-8 h-8" />
                </div>
                <div class="stat-title">{i18n.t("dashboard.cart_items")}</div>
                <div class="stat-value text-primary">{cart_items}</div>
            </div>
            <div class="stat">
                <div class="stat-figure text-secondary">
                    <Icon icon_id={IconId::HeroiconsOutlineBanknotes} class="w-8 h-8" />
                </div>
                <div class="stat-title">{i18n.t("dashboard.cart_total")}</div>
                <div class="stat-value text-secondary">{format_price(amount)}</div>
            </div>
            <div class="stat">
                <div class="stat-figure text-accent">
                    <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-8 h-8" />
                </div>
                <div class="stat-title">{i18n.t("dashboard.wishlist_items")}</div>
                <div class="stat-value text-accent">{saved}</div>
            </div>
        </div>
    }
}

/// Account overview. Only reachable through the route guard.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let user = use_selector(|state: &AppState| state.session.user.clone());
    let orders = use_selector(|state: &AppState| (state.account.orders.clone(), state.account.loading));
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated);

    {
        let dispatch = use_dispatch::<AppState>();
        use_effect_with(*is_authenticated, move |&signed_in| {
            if signed_in {
                spawn_local(async move {
                    let api = StorefrontClient::shared();
                    refresh_user(&api, &dispatch).await;
                    load_account(&api, &dispatch).await;
                });
            }
            || ()
        });
    }

    let greeting = (*user).as_ref().map_or_else(
        || i18n.t("dashboard.title"),
        |user| format!("{}, {}", i18n.t("dashboard.welcome"), user.display_name()),
    );
    let history = match &*orders {
        (Some(orders), _) => html! { <OrdersTable orders={orders.clone()} /> },
        (None, true) => html! { <Loading /> },
        (None, false) => Html::default(),
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{greeting}</h1>
            if let Some(user) = (*user).as_ref() {
                <p class="opacity-70">{&user.email}</p>
            }
            <DashboardStats />
            <div class="flex gap-2">
                <Link<Route> to={Route::Cart} classes="btn btn-primary">{i18n.t("dashboard.view_cart")}</Link<Route>>
                <Link<Route> to={Route::Wishlist} classes="btn btn-outline">{i18n.t("nav.wishlist")}</Link<Route>>
                <Link<Route> to={Route::Shop} classes="btn btn-outline">{i18n.t("home.cta")}</Link<Route>>
            </div>
            <section class="space-y-3">
                <h2 class="text-xl font-semibold">{i18n.t("dashboard.orders")}</h2>
                {history}
            </section>
            <ProfileForm />
        </div>
    }
}
