use shared::models::ReviewRequest;
use yewdux::Dispatch;

use super::{session_epoch, signed_in};
use crate::api::StorefrontApi;
use crate::models::app_state::{AppState, SessionScoped};
use crate::models::reviews::ReviewAction;

/// Load the user's review of `product_id` for session `epoch`.
pub async fn load_review(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, epoch: u64, product_id: i64) {
    dispatch.apply(SessionScoped::new(epoch, ReviewAction::LoadStarted(product_id)));
    let reply = match api.review(product_id).await {
        Ok(review) => ReviewAction::Loaded { product_id, review },
        Err(err) => {
            log::error!("failed to load review for product {product_id}: {err}");
            ReviewAction::Failed {
                product_id,
                message: err.user_message(),
            }
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}

/// Create the user's review of `product_id`, or update it if one exists.
///
/// The rating is validated before anything is sent. Returns whether the
/// review was saved.
pub async fn save_review(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    product_id: i64,
    request: &ReviewRequest,
) -> bool {
    if !signed_in(dispatch) {
        return false;
    }
    let epoch = session_epoch(dispatch);
    if let Err(err) = request.validate() {
        dispatch.apply(SessionScoped::new(
            epoch,
            ReviewAction::Failed {
                product_id,
                message: err.to_string(),
            },
        ));
        return false;
    }
    let exists = {
        let state = dispatch.get();
        state.reviews.product_id == Some(product_id) && state.reviews.review.is_some()
    };
    dispatch.apply(SessionScoped::new(epoch, ReviewAction::SaveStarted));
    let saved = if exists {
        api.update_review(product_id, request).await
    } else {
        api.create_review(product_id, request).await
    };
    let (reply, ok) = match saved {
        Ok(review) => {
            log::info!("saved review for product {product_id}");
            (
                ReviewAction::Loaded {
                    product_id,
                    review: Some(review),
                },
                true,
            )
        }
        Err(err) => {
            log::warn!("saving review for product {product_id} failed: {err}");
            (
                ReviewAction::Failed {
                    product_id,
                    message: err.user_message(),
                },
                false,
            )
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
    ok
}

/// Delete the user's review of `product_id`.
pub async fn delete_review(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, product_id: i64) {
    if !signed_in(dispatch) {
        return;
    }
    let epoch = session_epoch(dispatch);
    dispatch.apply(SessionScoped::new(epoch, ReviewAction::SaveStarted));
    let reply = match api.delete_review(product_id).await {
        Ok(()) => ReviewAction::Loaded {
            product_id,
            review: None,
        },
        Err(err) => {
            log::warn!("deleting review for product {product_id} failed: {err}");
            ReviewAction::Failed {
                product_id,
                message: err.user_message(),
            }
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}
