use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;
use crate::routes::Route;

#[function_component(CartBadge)]
pub fn cart_badge() -> Html {
    let total_items = use_selector(|state: &AppState| state.cart.total_items);
    html! {
        <Link<Route> to={Route::Cart} classes="btn btn-ghost btn-circle">
            <div class="indicator">
                <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-6 h-6" />
                <span class="badge badge-sm badge-primary indicator-item">{*total_items}</span>
            </div>
        </Link<Route>>
    }
}
