//! Saved-for-later products.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::Product;

/// One product on the signed-in user's wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    /// Wishlist line identifier.
    pub id: i64,
    /// The saved product.
    pub product: Product,
}

impl WishlistItem {
    /// Whether `product_id` is on the list.
    #[must_use]
    pub fn contains(items: &[WishlistItem], product_id: i64) -> bool {
        items.iter().any(|item| item.product.id == product_id)
    }
}

/// Body of `GET /api/wishlist/wishlist-items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistItemsResponse {
    /// Saved products, oldest first.
    pub wishlist: Vec<WishlistItem>,
}

/// Body of `GET /api/wishlist/get-item-total`.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistTotal {
    /// Number of saved products; some backends send it as a string.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total_items: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::fixtures::product;

    #[test]
    fn empty_wishlist_parses() {
        let response: WishlistItemsResponse = serde_json::from_str(r#"{"wishlist": []}"#).unwrap();
        assert!(response.wishlist.is_empty());
    }

    #[test]
    fn totals_accept_numbers_and_strings() {
        let number: WishlistTotal = serde_json::from_str(r#"{"total_items": 1}"#).unwrap();
        let text: WishlistTotal = serde_json::from_str(r#"{"total_items": "3"}"#).unwrap();
        assert_eq!(number.total_items, 1);
        assert_eq!(text.total_items, 3);
    }

    #[test]
    fn contains_matches_product_ids() {
        let items = vec![WishlistItem {
            id: 10,
            product: product(4, 9.0, 1),
        }];
        assert!(WishlistItem::contains(&items, 4));
        assert!(!WishlistItem::contains(&items, 10));
    }
}
