use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;
use crate::routes::Route;

/// Saved-product count next to the cart badge. Hidden for guests.
#[function_component(WishlistBadge)]
pub fn wishlist_badge() -> Html {
    let badge = use_selector(|state: &AppState| {
        state
            .session
            .is_authenticated
            .then_some(state.wishlist.total_items)
    });
    let Some(total_items) = *badge else {
        return Html::default();
    };
    html! {
        <Link<Route> to={Route::Wishlist} classes="btn btn-ghost btn-circle">
            <div class="indicator">
                <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-6 h-6" />
                <span class="badge badge-sm badge-secondary indicator-item">{total_items}</span>
            </div>
        </Link<Route>>
    }
}
