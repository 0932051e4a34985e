//! The shop listing and the open product detail.

use shared::models::Product;
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// Public product data. Kept across logout like the category list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    /// Shop listing, `None` until it has loaded once.
    pub listing: Option<Vec<Product>>,
    /// A listing request is in flight.
    pub listing_loading: bool,
    /// Product whose detail view is open.
    pub selected: Option<i64>,
    /// The selected product, once loaded.
    pub product: Option<Product>,
    /// Products related to the selected one.
    pub related: Vec<Product>,
    /// The selected product is being fetched.
    pub detail_loading: bool,
    /// Last failed product request.
    pub error: Option<String>,
}

impl ProductsState {
    /// Apply one product action.
    pub fn reduce(&mut self, action: ProductsAction) {
        match action {
            ProductsAction::ListingStarted => {
                self.listing_loading = true;
                self.error = None;
            }
            ProductsAction::ListingLoaded(products) => {
                self.listing = Some(products);
                self.listing_loading = false;
            }
            ProductsAction::ListingFailed(message) => {
                self.listing_loading = false;
                self.error = Some(message);
            }
            ProductsAction::DetailStarted(product_id) => {
                if self.selected != Some(product_id) {
                    self.product = None;
                    self.related.clear();
                }
                self.selected = Some(product_id);
                self.detail_loading = true;
                self.error = None;
            }
            ProductsAction::DetailLoaded(product) => {
                if self.selected != Some(product.id) {
                    log::debug!("dropping product {} loaded after navigating away", product.id);
                    return;
                }
                self.product = Some(product);
                self.detail_loading = false;
            }
            ProductsAction::RelatedLoaded { product_id, related } => {
                if self.selected == Some(product_id) {
                    self.related = related;
                }
            }
            ProductsAction::DetailFailed { product_id, message } => {
                if self.selected != Some(product_id) {
                    return;
                }
                self.detail_loading = false;
                self.error = Some(message);
            }
        }
    }

    /// The loaded product, if it is the one being shown.
    pub fn product(&self, product_id: i64) -> Option<&Product> {
        self.product.as_ref().filter(|product| product.id == product_id)
    }
}

/// Changes to [`ProductsState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    /// The shop listing is being fetched.
    ListingStarted,
    /// Replaces the listing wholesale.
    ListingLoaded(Vec<Product>),
    /// The listing request failed.
    ListingFailed(String),
    /// A product detail view opened.
    DetailStarted(i64),
    /// The selected product; ignored if another product was selected since.
    DetailLoaded(Product),
    /// Relatives of `product_id`; ignored unless it is still selected.
    RelatedLoaded {
        /// Product the list belongs to.
        product_id: i64,
        /// Products sharing its category.
        related: Vec<Product>,
    },
    /// Loading `product_id` failed.
    DetailFailed {
        /// Product that failed to load.
        product_id: i64,
        /// Message for the alert banner.
        message: String,
    },
}

impl Reducer<AppState> for ProductsAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).products.reduce(self);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product;

    #[test]
    fn listing_distinguishes_empty_from_unloaded() {
        let mut products = ProductsState::default();
        assert!(products.listing.is_none());
        products.reduce(ProductsAction::ListingStarted);
        products.reduce(ProductsAction::ListingLoaded(Vec::new()));
        assert_eq!(products.listing, Some(Vec::new()));
        assert!(!products.listing_loading);
    }

    #[test]
    fn late_detail_for_another_product_is_dropped() {
        let mut products = ProductsState::default();
        products.reduce(ProductsAction::DetailStarted(1));
        products.reduce(ProductsAction::DetailStarted(2));
        products.reduce(ProductsAction::DetailLoaded(product(1, 5.0, 1)));
        products.reduce(ProductsAction::RelatedLoaded {
            product_id: 1,
            related: vec![product(3, 5.0, 1)],
        });
        products.reduce(ProductsAction::DetailFailed {
            product_id: 1,
            message: "late".into(),
        });
        assert!(products.product.is_none());
        assert!(products.related.is_empty());
        assert!(products.detail_loading);
        assert!(products.error.is_none());

        products.reduce(ProductsAction::DetailLoaded(product(2, 5.0, 1)));
        assert_eq!(products.product(2).map(|p| p.id), Some(2));
        assert!(products.product(1).is_none());
        assert!(!products.detail_loading);
    }

    #[test]
    fn listing_failure_is_reported() {
        let mut products = ProductsState::default();
        products.reduce(ProductsAction::ListingStarted);
        products.reduce(ProductsAction::ListingFailed("Service Unavailable".into()));
        assert!(!products.listing_loading);
        assert_eq!(products.error.as_deref(), Some("Service Unavailable"));
    }
}
