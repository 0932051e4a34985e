use shared::models::Category;
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// Categories offered as search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Top-level categories with their sub-categories.
    pub categories: Vec<Category>,
    /// A category fetch is in flight.
    pub loading: bool,
    /// Last failed category fetch.
    pub error: Option<String>,
}

impl CatalogState {
    /// Apply one catalog action.
    pub fn reduce(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            CatalogAction::Loaded(categories) => {
                self.categories = categories;
                self.loading = false;
            }
            CatalogAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// Changes to [`CatalogState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// A category fetch began.
    FetchStarted,
    /// Replaces the category list wholesale.
    Loaded(Vec<Category>),
    /// The category fetch failed.
    Failed(String),
}

impl Reducer<AppState> for CatalogAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).catalog.reduce(self);
        state
    }
}
