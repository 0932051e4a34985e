use shared::models::{CartItem, Product};
use yewdux::Dispatch;

use super::{session_epoch, signed_in};
use crate::api::{ApiError, StorefrontApi};
use crate::models::app_state::{AppState, SessionScoped};
use crate::models::cart::CartAction;

/// Replace the cart slice with the backend's copy.
///
/// `epoch` is the session the sync runs for; if that session ends before
/// the backend answers, the reply is dropped.
pub async fn sync_cart(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, epoch: u64) {
    dispatch.apply(SessionScoped::new(epoch, CartAction::SyncStarted));
    let synced = async {
        let items = api.cart_items().await?;
        let totals = api.cart_totals().await?;
        Ok::<_, ApiError>((items, totals))
    }
    .await;
    let reply = match synced {
        Ok((items, totals)) => CartAction::Synced { items, totals },
        Err(err) => {
            log::error!("failed to load cart: {err}");
            CartAction::Failed(err.user_message())
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}

/// Run a backend cart mutation sent during `epoch`, then reload the cart.
async fn mutate(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    epoch: u64,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => sync_cart(api, dispatch, epoch).await,
        Err(err) => {
            log::error!("cart update failed: {err}");
            dispatch.apply(SessionScoped::new(epoch, CartAction::Failed(err.user_message())));
        }
    }
}

/// Add one unit of `product`, to the backend cart when signed in.
pub async fn add_to_cart(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, product: Product) {
    if !signed_in(dispatch) {
        dispatch.apply(CartAction::AddLocal(product));
        return;
    }
    let epoch = session_epoch(dispatch);
    let result = api.add_cart_item(product.id).await;
    mutate(api, dispatch, epoch, result).await;
}

/// Set the quantity of a line; zero removes it.
pub async fn update_quantity(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    product_id: i64,
    count: u32,
) {
    if !signed_in(dispatch) {
        dispatch.apply(CartAction::UpdateLocal { product_id, count });
        return;
    }
    let epoch = session_epoch(dispatch);
    let result = if count == 0 {
        api.remove_cart_item(product_id).await
    } else {
        api.update_cart_item(product_id, count).await
    };
    mutate(api, dispatch, epoch, result).await;
}

/// Drop the line for `product_id`.
pub async fn remove_from_cart(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, product_id: i64) {
    if !signed_in(dispatch) {
        dispatch.apply(CartAction::RemoveLocal(product_id));
        return;
    }
    let epoch = session_epoch(dispatch);
    let result = api.remove_cart_item(product_id).await;
    mutate(api, dispatch, epoch, result).await;
}

/// Drop every line.
pub async fn empty_cart(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) {
    if !signed_in(dispatch) {
        dispatch.apply(CartAction::Emptied);
        return;
    }
    let epoch = session_epoch(dispatch);
    let result = api.empty_cart().await;
    mutate(api, dispatch, epoch, result).await;
}

/// Copy guest cart lines into the backend cart after signing in.
///
/// Lines the backend rejects are logged and skipped.
pub async fn merge_guest_cart(api: &dyn StorefrontApi, items: &[CartItem]) {
    for item in items {
        let product_id = item.product.id;
        let mut merged = api.add_cart_item(product_id).await;
        if merged.is_ok() && item.count > 1 {
            merged = api.update_cart_item(product_id, item.count).await;
        }
        if let Err(err) = merged {
            log::warn!("could not merge cart line for product {product_id}: {err}");
        }
    }
}
