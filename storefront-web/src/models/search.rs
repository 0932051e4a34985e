use shared::models::{Product, SearchQuery};
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// The last submitted search and its results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// The search being shown, `None` before the first one.
    pub query: Option<SearchQuery>,
    /// Products matching `query`.
    pub results: Vec<Product>,
    /// Results for `query` are on their way.
    pub loading: bool,
    /// Why the last search failed.
    pub error: Option<String>,
}

impl SearchState {
    /// Apply one search action.
    pub fn reduce(&mut self, action: SearchAction) {
        match action {
            SearchAction::Started(query) => {
                self.query = Some(query);
                self.results.clear();
                self.loading = true;
                self.error = None;
            }
            SearchAction::Loaded { query, results } => {
                if self.query.as_ref() != Some(&query) {
                    log::debug!("dropping results for superseded search {query:?}");
                    return;
                }
                self.results = results;
                self.loading = false;
            }
            SearchAction::Failed { query, message } => {
                if self.query.as_ref() != Some(&query) {
                    return;
                }
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// Changes to [`SearchState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// A search was submitted and becomes the current one.
    Started(SearchQuery),
    /// Results for `query`; ignored when a newer search has started since.
    Loaded {
        /// Query the results answer.
        query: SearchQuery,
        /// Matching products.
        results: Vec<Product>,
    },
    /// `query` failed; ignored when a newer search has started since.
    Failed {
        /// Query that failed.
        query: SearchQuery,
        /// Message for the alert banner.
        message: String,
    },
}

impl Reducer<AppState> for SearchAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).search.reduce(self);
        state
    }
}
