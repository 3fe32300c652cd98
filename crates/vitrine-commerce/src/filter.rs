//! Catalog filtering.
//!
//! The listing screen derives its visible set from two independent,
//! conjunctive predicates: a free-text query matched case-insensitively
//! against title and category, and an exact-category selection.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Which category the listing is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategorySelection {
    /// No restriction.
    #[default]
    All,
    /// Only products whose category equals this value exactly.
    Only(String),
}

impl CategorySelection {
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// The selected category name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(name) => Some(name),
        }
    }
}

/// The listing screen's filter state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Free-text query; empty means no text restriction.
    pub query: String,
    /// Category restriction.
    pub category: CategorySelection,
}

impl CatalogFilter {
    /// Create a filter from a query and a category selection.
    pub fn new(query: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Whether both predicates are at their defaults.
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    /// Check a single product against both predicates.
    ///
    /// The query matches if it is a case-insensitive substring of the title
    /// or the category. The category selection requires exact equality.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let in_title = product.title.to_lowercase().contains(&needle);
            let in_category = product.category.to_lowercase().contains(&needle);
            if !in_title && !in_category {
                return false;
            }
        }

        match &self.category {
            CategorySelection::All => true,
            CategorySelection::Only(name) => product.category == *name,
        }
    }

    /// Derive the filtered view of a fetched collection.
    ///
    /// The result is always a subset of the input, in input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Casual Shirt", "men's clothing"),
            product(2, "Printed T-Shirt", "women's clothing"),
            product(3, "Gold Ring", "jewelery"),
            product(4, "SSD Drive", "electronics"),
            product(5, "Rain Jacket", "men's clothing"),
        ]
    }

    // === Query Tests ===

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let filter = CatalogFilter::new("SHIRT", CategorySelection::All);
        let visible = filter.apply(&sample_catalog());

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.title.to_lowercase().contains("shirt")));
    }

    #[test]
    fn test_query_matches_category() {
        let filter = CatalogFilter::new("jewel", CategorySelection::All);
        let visible = filter.apply(&sample_catalog());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_query_excludes_non_matches() {
        let catalog = sample_catalog();
        let filter = CatalogFilter::new("shirt", CategorySelection::All);
        let visible = filter.apply(&catalog);

        let needle = "shirt";
        for p in &catalog {
            let matched = p.title.to_lowercase().contains(needle)
                || p.category.to_lowercase().contains(needle);
            assert_eq!(visible.contains(p), matched);
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let catalog = sample_catalog();
        let filter = CatalogFilter::default();
        assert_eq!(filter.apply(&catalog), catalog);
    }

    // === Category Tests ===

    #[test]
    fn test_category_is_exact_match() {
        let filter = CatalogFilter::new(
            "",
            CategorySelection::Only("men's clothing".to_string()),
        );
        let visible = filter.apply(&sample_catalog());

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "men's clothing"));
    }

    #[test]
    fn test_category_does_not_substring_match() {
        // "clothing" is a substring of two category values but equals neither.
        let filter = CatalogFilter::new("", CategorySelection::Only("clothing".to_string()));
        assert!(filter.apply(&sample_catalog()).is_empty());
    }

    // === Conjunction Tests ===

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = sample_catalog();
        let query_only = CatalogFilter::new("shirt", CategorySelection::All);
        let category_only =
            CatalogFilter::new("", CategorySelection::Only("men's clothing".to_string()));
        let both = CatalogFilter::new(
            "shirt",
            CategorySelection::Only("men's clothing".to_string()),
        );

        let expected: Vec<Product> = query_only
            .apply(&catalog)
            .into_iter()
            .filter(|p| category_only.matches(p))
            .collect();

        assert_eq!(both.apply(&catalog), expected);
        assert_eq!(expected.len(), 1);
        assert_eq!(expected[0].id, 1);
    }

    #[test]
    fn test_result_is_subset_in_input_order() {
        let catalog = sample_catalog();
        let filter = CatalogFilter::new("s", CategorySelection::All);
        let visible = filter.apply(&catalog);

        let mut last_index = 0;
        for p in &visible {
            let index = catalog.iter().position(|c| c == p).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_is_default_after_clear() {
        let mut filter = CatalogFilter::new(
            "shirt",
            CategorySelection::Only("jewelery".to_string()),
        );
        assert!(!filter.is_default());

        filter = CatalogFilter::default();
        assert!(filter.is_default());
    }
}
