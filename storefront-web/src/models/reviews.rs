//! The signed-in user's review of the product being viewed.

use shared::models::Review;
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// One review per user and product. Replies for a product other than the
/// one on screen are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    /// Product the review belongs to.
    pub product_id: Option<i64>,
    /// The user's review, `None` if they have not written one.
    pub review: Option<Review>,
    /// The review is being fetched.
    pub loading: bool,
    /// A create, update or delete is in flight.
    pub saving: bool,
    /// Last failed review request.
    pub error: Option<String>,
}

impl ReviewState {
    /// Apply one review action.
    pub fn reduce(&mut self, action: ReviewAction) {
        match action {
            ReviewAction::LoadStarted(product_id) => {
                *self = Self {
                    product_id: Some(product_id),
                    loading: true,
                    ..Self::default()
                };
            }
            ReviewAction::SaveStarted => {
                self.saving = true;
                self.error = None;
            }
            ReviewAction::Loaded { product_id, review } => {
                if self.product_id != Some(product_id) {
                    log::debug!("dropping review for product {product_id}, no longer shown");
                    return;
                }
                self.review = review;
                self.loading = false;
                self.saving = false;
            }
            ReviewAction::Failed { product_id, message } => {
                if self.product_id != Some(product_id) {
                    return;
                }
                self.loading = false;
                self.saving = false;
                self.error = Some(message);
            }
        }
    }
}

/// Changes to [`ReviewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    /// A product page opened for a signed-in user.
    LoadStarted(i64),
    /// A create, update or delete was sent.
    SaveStarted,
    /// The review as the backend now has it.
    Loaded {
        /// Product the review belongs to.
        product_id: i64,
        /// `None` once deleted or never written.
        review: Option<Review>,
    },
    /// A review request failed.
    Failed {
        /// Product the request was for.
        product_id: i64,
        /// Message for the alert banner.
        message: String,
    },
}

impl Reducer<AppState> for ReviewAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).reviews.reduce(self);
        state
    }
}
