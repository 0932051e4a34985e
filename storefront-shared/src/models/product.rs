//! Catalog products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// A product as listed by the catalog endpoints.
///
/// Prices arrive either as JSON numbers or as decimal strings (`"50.00"`),
/// depending on the serializer that produced them.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Photo path, usually relative to the media root (`/media/photos/...`).
    #[serde(default)]
    pub photo: String,
    /// Long description shown on the detail page.
    #[serde(default)]
    pub description: String,
    /// Selling price.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: f64,
    /// List price the selling price is compared against.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub compare_price: f64,
    /// Identifier of the owning category.
    pub category: i64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
    /// Units sold so far.
    #[serde(default)]
    pub sold: u32,
    /// When the product was listed.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether at least one unit can be ordered.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Whole-percent discount against the compare price, if any.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        if self.compare_price <= self.price || self.compare_price <= 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = ((1.0 - self.price / self.compare_price) * 100.0).round() as u32;
        (percent > 0).then_some(percent)
    }
}

/// Body of `GET /api/product/get-products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    /// Every listed product.
    pub products: Vec<Product>,
}

/// Body of `GET /api/product/product/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetailResponse {
    /// The requested product.
    pub product: Product,
}

/// Body of `GET /api/product/related/{id}`.
///
/// The backend answers `{"error": "..."}` instead of an empty list when a
/// product has no relatives, so the list defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RelatedProductsResponse {
    /// Products from the same category, excluding the requested one.
    #[serde(default)]
    pub related_products: Vec<Product>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Product;

    pub(crate) fn product(id: i64, price: f64, quantity: u32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            photo: "/media/photos/test.jpg".to_string(),
            description: "Descripción de prueba".to_string(),
            price,
            compare_price: price,
            category: 1,
            quantity,
            sold: 0,
            date_created: None,
        }
    }
}
