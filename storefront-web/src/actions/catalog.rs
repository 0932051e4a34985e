use yewdux::Dispatch;

use crate::api::StorefrontApi;
use crate::models::app_state::AppState;
use crate::models::catalog::CatalogAction;

/// Load the category list.
///
/// Returns `false` without issuing a request when a fetch is already in
/// flight. Once that fetch settles, the next call requests again.
pub async fn fetch_categories(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) -> bool {
    if dispatch.get().catalog.loading {
        log::debug!("category fetch already in flight");
        return false;
    }
    dispatch.apply(CatalogAction::FetchStarted);
    match api.categories().await {
        Ok(categories) => {
            log::debug!("loaded {} top-level categories", categories.len());
            dispatch.apply(CatalogAction::Loaded(categories));
        }
        Err(err) => {
            log::error!("failed to load categories: {err}");
            dispatch.apply(CatalogAction::Failed(err.user_message()));
        }
    }
    true
}
