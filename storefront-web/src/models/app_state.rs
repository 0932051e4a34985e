use std::any::type_name;
use std::rc::Rc;
use yewdux::Store;
use yewdux::prelude::Reducer;

use super::account::AccountState;
use super::cart::CartState;
use super::catalog::CatalogState;
use super::products::ProductsState;
use super::reviews::ReviewState;
use super::search::SearchState;
use super::session::SessionState;
use super::wishlist::WishlistState;

/// The central store. Views read it through `use_selector` projections and
/// change it only by dispatching the reducer actions defined next to each
/// slice.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Who is signed in.
    pub session: SessionState,
    /// Search filter categories.
    pub catalog: CatalogState,
    /// Shop listing and the open product.
    pub products: ProductsState,
    /// Guest or account cart.
    pub cart: CartState,
    /// Saved products.
    pub wishlist: WishlistState,
    /// The user's review of the open product.
    pub reviews: ReviewState,
    /// Profile and order history.
    pub account: AccountState,
    /// Last submitted search.
    pub search: SearchState,
}

impl AppState {
    /// First pending error across slices, in display priority order.
    pub fn first_error(&self) -> Option<&str> {
        [
            &self.session.error,
            &self.cart.error,
            &self.wishlist.error,
            &self.account.error,
            &self.reviews.error,
            &self.products.error,
            &self.search.error,
            &self.catalog.error,
        ]
        .into_iter()
        .find_map(|error| error.as_deref())
    }
}

/// Returns the store to a signed-out state.
///
/// Every per-account slice goes back to its default and the session epoch
/// advances, so replies still in flight for the old session are dropped.
/// Categories and products are public data and are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetAll;

impl Reducer<AppState> for ResetAll {
    fn apply(self, state: Rc<AppState>) -> Rc<AppState> {
        Rc::new(AppState {
            session: state.session.ended(),
            catalog: state.catalog.clone(),
            products: state.products.clone(),
            ..AppState::default()
        })
    }
}

/// A backend reply that belongs to the session it was requested in.
///
/// Applied only while the session epoch still matches; a sign-in or
/// sign-out in between turns it into a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionScoped<A> {
    /// Session epoch the request was sent in.
    pub epoch: u64,
    /// The reply to apply.
    pub action: A,
}

impl<A> SessionScoped<A> {
    /// Tag `action` with the session it belongs to.
    pub const fn new(epoch: u64, action: A) -> Self {
        Self { epoch, action }
    }
}

impl<A: Reducer<AppState>> Reducer<AppState> for SessionScoped<A> {
    fn apply(self, state: Rc<AppState>) -> Rc<AppState> {
        if self.epoch != state.session.epoch {
            log::debug!(
                "dropping {} from session epoch {} (now {})",
                type_name::<A>(),
                self.epoch,
                state.session.epoch
            );
            return state;
        }
        self.action.apply(state)
    }
}

/// Dismisses every pending error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearErrors;

impl Reducer<AppState> for ClearErrors {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        if state.first_error().is_none() {
            return state;
        }
        let next = Rc::make_mut(&mut state);
        next.session.error = None;
        next.catalog.error = None;
        next.products.error = None;
        next.cart.error = None;
        next.wishlist.error = None;
        next.reviews.error = None;
        next.account.error = None;
        next.search.error = None;
        state
    }
}
