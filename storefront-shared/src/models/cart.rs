//! Shopping cart lines and totals.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::Product;

/// One line of a shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Line identifier; guest carts reuse the product id.
    pub id: i64,
    /// Units of the product in the cart.
    pub count: u32,
    /// The product on this line.
    pub product: Product,
}

impl CartItem {
    /// Line price at the selling price.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.count)
    }

    /// Line price at the list price.
    #[must_use]
    pub fn compare_subtotal(&self) -> f64 {
        self.product.compare_price * f64::from(self.count)
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn total_items(items: &[CartItem]) -> u32 {
        items.iter().map(|item| item.count).sum()
    }
}

/// Body of `GET /api/cart/cart-items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemsResponse {
    /// Lines of the signed-in user's cart.
    pub cart: Vec<CartItem>,
}

/// Body of `GET /api/cart/get-total`.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line subtotals at the selling price.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total_cost: f64,
    /// Sum of line subtotals at the list price.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub total_compare_cost: f64,
}

impl CartTotals {
    /// Totals computed locally from line items, used for guest carts.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            total_cost: items.iter().map(CartItem::subtotal).sum(),
            total_compare_cost: items.iter().map(CartItem::compare_subtotal).sum(),
        }
    }
}

/// Body of the cart and wishlist `add-item` endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddItemRequest {
    /// Product to add.
    pub product_id: i64,
}

/// Body of `PUT /api/cart/update-item`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateItemRequest {
    /// Product whose line changes.
    pub product_id: i64,
    /// New quantity.
    pub count: u32,
}

/// Body of the cart and wishlist `remove-item` endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveItemRequest {
    /// Product to remove.
    pub product_id: i64,
}
