//! Product categories.

use serde::{Deserialize, Serialize};

/// A product category. Top-level categories carry their children inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Backend identifier, always positive.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Nested categories, empty for leaves.
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

impl Category {
    /// Find a category with the given id anywhere in the tree.
    #[must_use]
    pub fn find(categories: &[Category], id: i64) -> Option<&Category> {
        categories.iter().find_map(|category| {
            if category.id == id {
                Some(category)
            } else {
                Self::find(&category.sub_categories, id)
            }
        })
    }

    /// Depth-first listing of the tree as `(depth, category)` pairs, used to
    /// build indented select options.
    #[must_use]
    pub fn flatten(categories: &[Category]) -> Vec<(usize, &Category)> {
        fn walk<'a>(depth: usize, nodes: &'a [Category], out: &mut Vec<(usize, &'a Category)>) {
            for node in nodes {
                out.push((depth, node));
                walk(depth + 1, &node.sub_categories, out);
            }
        }

        let mut out = Vec::new();
        walk(0, categories, &mut out);
        out
    }
}

/// Body of `GET /api/category/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    /// Top-level categories with their children inline.
    pub categories: Vec<Category>,
}
