use yewdux::Dispatch;

use super::reviews::load_review;
use super::{session_epoch, signed_in};
use crate::api::StorefrontApi;
use crate::models::app_state::AppState;
use crate::models::products::ProductsAction;

/// Load the shop listing.
pub async fn load_products(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) {
    dispatch.apply(ProductsAction::ListingStarted);
    match api.products().await {
        Ok(products) => {
            log::debug!("loaded {} products", products.len());
            dispatch.apply(ProductsAction::ListingLoaded(products));
        }
        Err(err) => {
            log::error!("failed to load products: {err}");
            dispatch.apply(ProductsAction::ListingFailed(err.user_message()));
        }
    }
}

/// Open the detail view of `product_id`: the product, its relatives and,
/// for a signed-in user, their review of it.
///
/// A product without relatives answers 404 on the related endpoint; that
/// is shown as an empty list, not an error.
pub async fn load_product(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, product_id: i64) {
    dispatch.apply(ProductsAction::DetailStarted(product_id));
    match api.product(product_id).await {
        Ok(product) => dispatch.apply(ProductsAction::DetailLoaded(product)),
        Err(err) => {
            log::error!("failed to load product {product_id}: {err}");
            dispatch.apply(ProductsAction::DetailFailed {
                product_id,
                message: err.user_message(),
            });
            return;
        }
    }

    let related = match api.related_products(product_id).await {
        Ok(related) => related,
        Err(err) if err.is_not_found() => Vec::new(),
        Err(err) => {
            log::warn!("could not load products related to {product_id}: {err}");
            Vec::new()
        }
    };
    dispatch.apply(ProductsAction::RelatedLoaded { product_id, related });

    if signed_in(dispatch) {
        load_review(api, dispatch, session_epoch(dispatch), product_id).await;
    }
}
