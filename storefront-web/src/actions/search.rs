use shared::models::SearchQuery;
use yewdux::Dispatch;

use crate::api::StorefrontApi;
use crate::models::app_state::AppState;
use crate::models::search::SearchAction;
use crate::routes::Route;

/// Submit a search from the composer.
///
/// The query is checked against the loaded catalog, recorded as the current
/// search and `navigate` is called with [`Route::Search`] before the request
/// goes out; the results page renders the search slice while it loads.
pub async fn submit_search(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    query: SearchQuery,
    navigate: impl FnOnce(Route),
) {
    let categories = dispatch.get().catalog.categories.clone();
    let requested = query.category_id;
    let query = query.normalized(&categories);
    if query.category_id != requested {
        log::warn!("category {requested} is not in the catalog, searching all categories");
    }
    dispatch.apply(SearchAction::Started(query.clone()));
    navigate(Route::Search);
    run_search(api, dispatch, query).await;
}

/// Run `query` and store its results, unless a newer search replaced it.
pub async fn run_search(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, query: SearchQuery) {
    match api.search_products(&query).await {
        Ok(results) => {
            log::debug!("search {:?} matched {} products", query.search, results.len());
            dispatch.apply(SearchAction::Loaded { query, results });
        }
        Err(err) => {
            log::error!("search failed: {err}");
            dispatch.apply(SearchAction::Failed {
                query,
                message: err.user_message(),
            });
        }
    }
}
