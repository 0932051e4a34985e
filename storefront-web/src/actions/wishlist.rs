use shared::models::WishlistItem;
use yewdux::Dispatch;

use super::{session_epoch, signed_in};
use crate::api::{ApiError, StorefrontApi};
use crate::models::app_state::{AppState, SessionScoped};
use crate::models::wishlist::WishlistAction;

async fn fetch_wishlist(api: &dyn StorefrontApi) -> Result<(Vec<WishlistItem>, u32), ApiError> {
    let items = api.wishlist_items().await?;
    let total_items = api.wishlist_total().await?;
    Ok((items, total_items))
}

/// Replace the wishlist slice with the backend's copy for session `epoch`.
pub async fn sync_wishlist(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, epoch: u64) {
    dispatch.apply(SessionScoped::new(epoch, WishlistAction::SyncStarted));
    let reply = match fetch_wishlist(api).await {
        Ok((items, total_items)) => WishlistAction::Synced { items, total_items },
        Err(err) => {
            log::error!("failed to load wishlist: {err}");
            WishlistAction::Failed(err.user_message())
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}

/// Save or unsave `product_id` depending on whether it is saved now.
///
/// Guests have no wishlist; for them this does nothing and returns `false`.
pub async fn toggle_wishlist(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, product_id: i64) -> bool {
    if !signed_in(dispatch) {
        log::debug!("wishlist needs a signed-in user");
        return false;
    }
    let epoch = session_epoch(dispatch);
    let saved = dispatch.get().wishlist.contains(product_id);
    let result = if saved {
        api.remove_wishlist_item(product_id).await
    } else {
        api.add_wishlist_item(product_id).await
    };
    match result {
        Ok(()) => sync_wishlist(api, dispatch, epoch).await,
        Err(err) => {
            log::error!("wishlist update for product {product_id} failed: {err}");
            dispatch.apply(SessionScoped::new(epoch, WishlistAction::Failed(err.user_message())));
        }
    }
    true
}
