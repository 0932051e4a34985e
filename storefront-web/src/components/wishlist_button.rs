use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_dispatch, use_selector_with_deps};

use crate::actions::wishlist::toggle_wishlist;
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct WishlistButtonProps {
    /// Product to save or unsave.
    pub product_id: i64,
}

/// Heart toggle that saves or unsaves a product. Guests do not see it.
#[function_component(WishlistButton)]
pub fn wishlist_button(props: &WishlistButtonProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let saved = use_selector_with_deps(
        |state: &AppState, product_id: &i64| {
            state
                .session
                .is_authenticated
                .then(|| state.wishlist.contains(*product_id))
        },
        props.product_id,
    );
    let Some(saved) = *saved else {
        return Html::default();
    };

    let product_id = props.product_id;
    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        let dispatch = dispatch.clone();
        spawn_local(async move {
            toggle_wishlist(&StorefrontClient::shared(), &dispatch, product_id).await;
        });
    });
    let (icon_id, label) = if saved {
        (IconId::HeroiconsSolidHeart, i18n.t("product.remove_wishlist"))
    } else {
        (IconId::HeroiconsOutlineHeart, i18n.t("product.save_wishlist"))
    };
    html! {
        <button type="button" class="btn btn-ghost btn-sm btn-circle" aria-label={label.clone()} title={label} {onclick}>
            <Icon {icon_id} class="w-5 h-5 text-secondary" />
        </button>
    }
}
