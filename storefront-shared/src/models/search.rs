//! Product search.

use serde::{Deserialize, Serialize};

use super::{Category, Product};

/// Category id meaning "search every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /api/product/search`.
///
/// Neither field is validated: an empty `search` with [`ALL_CATEGORIES`]
/// matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text matched against product names and descriptions.
    pub search: String,
    /// Category filter, [`ALL_CATEGORIES`] for none.
    pub category_id: i64,
}

impl SearchQuery {
    /// A query for `search` within `category_id`.
    #[must_use]
    pub fn new(search: impl Into<String>, category_id: i64) -> Self {
        Self {
            search: search.into(),
            category_id,
        }
    }

    /// Whether the query spans every category.
    #[must_use]
    pub const fn is_all_categories(&self) -> bool {
        self.category_id == ALL_CATEGORIES
    }

    /// Whether `category_id` points at a known category (or is the sentinel).
    /// An empty catalog accepts every id since nothing is loaded to check against.
    #[must_use]
    pub fn references_catalog(&self, categories: &[Category]) -> bool {
        self.is_all_categories()
            || categories.is_empty()
            || Category::find(categories, self.category_id).is_some()
    }

    /// Replace an unknown category with [`ALL_CATEGORIES`].
    #[must_use]
    pub fn normalized(mut self, categories: &[Category]) -> Self {
        if !self.references_catalog(categories) {
            self.category_id = ALL_CATEGORIES;
        }
        self
    }
}

/// Body returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Matching products.
    pub search_products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn catalog() -> Vec<Category> {
        vec![Category {
            id: 1,
            name: "Electronics".to_string(),
            sub_categories: vec![Category {
                id: 3,
                name: "Shoes".to_string(),
                sub_categories: Vec::new(),
            }],
        }]
    }

    #[test_case(0, 0 ; "sentinel is kept")]
    #[test_case(1, 1 ; "top level id is kept")]
    #[test_case(3, 3 ; "nested id is kept")]
    #[test_case(42, 0 ; "unknown id falls back to all")]
    fn normalizes_against_catalog(requested: i64, expected: i64) {
        let query = SearchQuery::new("shoes", requested).normalized(&catalog());
        assert_eq!(query.category_id, expected);
        assert_eq!(query.search, "shoes");
    }

    #[test]
    fn empty_catalog_accepts_any_id() {
        let query = SearchQuery::new("", 42);
        assert!(query.references_catalog(&[]));
        assert_eq!(query.normalized(&[]).category_id, 42);
    }

    #[test]
    fn serializes_as_backend_expects() {
        let json = serde_json::to_value(SearchQuery::new("Buscar", ALL_CATEGORIES)).unwrap();
        assert_eq!(json, serde_json::json!({"search": "Buscar", "category_id": 0}));
    }
}
