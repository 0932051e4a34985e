use shared::models::{CartItem, CartTotals, Product};
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

const OUT_OF_STOCK: &str = "Not enough of this item in stock";

/// The shopping cart. Signed-in carts mirror the backend; guest carts are
/// kept here only.
///
/// `total_items` always equals the sum of line quantities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,
    /// Units across all lines, shown on the navbar badge.
    pub total_items: u32,
    /// Sum of line subtotals at current prices.
    pub amount: f64,
    /// Sum of line subtotals at list prices.
    pub compare_amount: f64,
    /// A backend sync is in flight.
    pub loading: bool,
    /// Last failed cart change.
    pub error: Option<String>,
}

impl CartState {
    /// Apply one cart action.
    pub fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::SyncStarted => {
                self.loading = true;
                self.error = None;
            }
            CartAction::Synced { items, totals } => {
                self.items = items;
                self.amount = totals.total_cost;
                self.compare_amount = totals.total_compare_cost;
                self.loading = false;
            }
            CartAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            CartAction::AddLocal(product) => self.add_local(product),
            CartAction::UpdateLocal { product_id, count } => self.update_local(product_id, count),
            CartAction::RemoveLocal(product_id) => {
                self.items.retain(|item| item.product.id != product_id);
                self.recompute_amounts();
            }
            CartAction::Emptied => {
                self.items.clear();
                self.recompute_amounts();
            }
        }
        self.total_items = CartItem::total_items(&self.items);
    }

    /// Quantity of `product_id` currently in the cart.
    pub fn count_of(&self, product_id: i64) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == product_id)
            .map_or(0, |item| item.count)
    }

    fn add_local(&mut self, product: Product) {
        if self.count_of(product.id) >= product.quantity {
            self.error = Some(OUT_OF_STOCK.to_string());
            return;
        }
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.count += 1,
            None => self.items.push(CartItem {
                id: product.id,
                count: 1,
                product,
            }),
        }
        self.recompute_amounts();
    }

    fn update_local(&mut self, product_id: i64, count: u32) {
        if count == 0 {
            self.items.retain(|item| item.product.id != product_id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product_id) {
            if count > item.product.quantity {
                item.count = item.product.quantity;
                self.error = Some(OUT_OF_STOCK.to_string());
            } else {
                item.count = count;
            }
        }
        self.recompute_amounts();
    }

    fn recompute_amounts(&mut self) {
        let totals = CartTotals::from_items(&self.items);
        self.amount = totals.total_cost;
        self.compare_amount = totals.total_compare_cost;
    }
}

/// Changes to [`CartState`]. The `*Local` variants edit a guest cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// A backend sync began.
    SyncStarted,
    /// Backend copy of the cart, fetched after every signed-in mutation.
    Synced {
        /// Backend cart lines.
        items: Vec<CartItem>,
        /// Backend totals.
        totals: CartTotals,
    },
    /// A cart request failed.
    Failed(String),
    /// One more unit of a product, up to its stock.
    AddLocal(Product),
    /// Set a line's quantity; zero removes it.
    UpdateLocal {
        /// Product of the line.
        product_id: i64,
        /// New quantity.
        count: u32,
    },
    /// Drop the line for a product.
    RemoveLocal(i64),
    /// Drop every line.
    Emptied,
}

impl Reducer<AppState> for CartAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).cart.reduce(self);
        state
    }
}
