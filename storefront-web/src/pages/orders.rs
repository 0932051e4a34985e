use i18nrs::yew::use_translation;
use shared::models::Order;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector_with_deps};

use crate::actions::account::load_order;
use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_card::format_price;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Day an order was placed, `YYYY-MM-DD`.
pub fn issued_on(order: &Order) -> String {
    order
        .date_issued
        .map(|date| date.date_naive().to_string())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct OrdersTableProps {
    /// Orders, newest first.
    pub orders: Vec<Order>,
}

/// Order history, one row per order linking to its detail page.
#[function_component(OrdersTable)]
pub fn orders_table(props: &OrdersTableProps) -> Html {
    let (i18n, ..) = use_translation();
    if props.orders.is_empty() {
        return html! { <p class="opacity-70">{i18n.t("orders.empty")}</p> };
    }
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{i18n.t("orders.transaction")}</th>
                        <th>{i18n.t("orders.date")}</th>
                        <th>{i18n.t("orders.amount")}</th>
                        <th>{i18n.t("orders.status_label")}</th>
                        <th />
                    </tr>
                </thead>
                <tbody>
                    { for props.orders.iter().map(|order| html! {
                        <tr key={order.transaction_id.clone()}>
                            <td class="font-mono">{&order.transaction_id}</td>
                            <td>{issued_on(order)}</td>
                            <td>{format_price(order.amount)}</td>
                            <td><span class="badge badge-outline">{i18n.t(order.status.label_key())}</span></td>
                            <td>
                                <Link<Route>
                                    to={Route::Order { transaction_id: order.transaction_id.clone() }}
                                    classes="link link-primary"
                                >
                                    {i18n.t("orders.details")}
                                </Link<Route>>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderPageProps {
    /// Order to show, from the route.
    pub transaction_id: String,
}

/// One past order with its lines and shipping details.
#[function_component(OrderPage)]
pub fn order_page(props: &OrderPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let detail = use_selector_with_deps(
        |state: &AppState, transaction_id: &String| {
            let order = state
                .account
                .order
                .clone()
                .filter(|order| &order.transaction_id == transaction_id);
            (order, state.account.loading)
        },
        props.transaction_id.clone(),
    );

    use_effect_with(props.transaction_id.clone(), move |transaction_id| {
        let transaction_id = transaction_id.clone();
        spawn_local(async move {
            load_order(&StorefrontClient::shared(), &dispatch, transaction_id).await;
        });
        || ()
    });

    let back = html! {
        <Link<Route> to={Route::Dashboard} classes="btn btn-ghost btn-sm">{i18n.t("orders.back")}</Link<Route>>
    };
    let (order, loading) = &*detail;
    let Some(order) = order else {
        return if *loading {
            html! { <Loading /> }
        } else {
            html! {
                <div class="space-y-4">
                    <p class="opacity-70">{i18n.t("orders.not_found")}</p>
                    {back}
                </div>
            }
        };
    };

    html! {
        <div class="space-y-6">
            {back}
            <h1 class="text-2xl font-bold">
                {format!("{} {}", i18n.t("orders.transaction"), order.transaction_id)}
            </h1>
            <div class="flex flex-wrap gap-4 text-sm">
                <span>{format!("{}: {}", i18n.t("orders.date"), issued_on(order))}</span>
                <span class="badge badge-outline">{i18n.t(order.status.label_key())}</span>
            </div>
            <ul class="divide-y divide-base-300">
                { for order.order_items.iter().map(|item| html! {
                    <li class="flex justify-between py-2">
                        <span>{format!("{} × {}", item.count, item.name)}</span>
                        <span>{format_price(item.subtotal())}</span>
                    </li>
                }) }
                <li class="flex justify-between py-2">
                    <span>{format!("{}: {} ({})", i18n.t("orders.shipping"), order.shipping_name, order.shipping_time)}</span>
                    <span>{format_price(order.shipping_price)}</span>
                </li>
                <li class="flex justify-between py-2 font-semibold">
                    <span>{i18n.t("orders.amount")}</span>
                    <span>{format_price(order.amount)}</span>
                </li>
            </ul>
            <div class="text-sm">
                <p class="font-semibold">{i18n.t("orders.ship_to")}</p>
                <p>{&order.full_name}</p>
                <p>{&order.address_line_1}</p>
                <p>{format!("{}, {}", order.city, order.country_region)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::issued_on;
    use crate::test_support::order;

    #[test]
    fn issue_date_is_the_calendar_day() {
        let mut placed = order("tx-1");
        assert_eq!(issued_on(&placed), "");
        placed.date_issued = "2024-03-09T22:15:00Z".parse().ok();
        assert_eq!(issued_on(&placed), "2024-03-09");
    }
}
