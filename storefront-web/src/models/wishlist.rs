//! Saved products of the signed-in user.

use shared::models::WishlistItem;
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// The wishlist. Only signed-in users have one; it mirrors the backend and
/// is emptied on logout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    /// Saved products.
    pub items: Vec<WishlistItem>,
    /// Count reported by the backend, shown next to the cart badge.
    pub total_items: u32,
    /// A reload is in flight.
    pub loading: bool,
    /// Last failed wishlist request.
    pub error: Option<String>,
}

impl WishlistState {
    /// Apply one wishlist action.
    pub fn reduce(&mut self, action: WishlistAction) {
        match action {
            WishlistAction::SyncStarted => {
                self.loading = true;
                self.error = None;
            }
            WishlistAction::Synced { items, total_items } => {
                self.items = items;
                self.total_items = total_items;
                self.loading = false;
            }
            WishlistAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    /// Whether `product_id` is saved.
    pub fn contains(&self, product_id: i64) -> bool {
        WishlistItem::contains(&self.items, product_id)
    }
}

/// Changes to [`WishlistState`].
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// A reload began.
    SyncStarted,
    /// Backend copy of the wishlist.
    Synced {
        /// Saved products.
        items: Vec<WishlistItem>,
        /// Backend item count.
        total_items: u32,
    },
    /// A wishlist request failed.
    Failed(String),
}

impl Reducer<AppState> for WishlistAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).wishlist.reduce(self);
        state
    }
}
