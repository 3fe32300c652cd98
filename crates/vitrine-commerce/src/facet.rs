//! Category facets.

use crate::product::Product;
use std::collections::HashMap;

/// A distinct category value present in a fetched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFacet {
    pub name: String,
    /// How many products in the collection carry this category.
    pub count: u32,
}

/// Derive the category facets of a collection.
///
/// Sorted by descending count, then name, so re-renders are stable. The
/// ordering is presentational only.
pub fn facets(products: &[Product]) -> Vec<CategoryFacet> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_insert(0) += 1;
    }

    let mut facets: Vec<CategoryFacet> = counts
        .into_iter()
        .map(|(name, count)| CategoryFacet {
            name: name.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("product-{id}"),
            price: 1.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_facets_are_distinct_with_counts() {
        let catalog = vec![
            product(1, "electronics"),
            product(2, "jewelery"),
            product(3, "electronics"),
            product(4, "electronics"),
        ];

        let facets = facets(&catalog);
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].name, "electronics");
        assert_eq!(facets[0].count, 3);
        assert_eq!(facets[1].name, "jewelery");
        assert_eq!(facets[1].count, 1);
    }

    #[test]
    fn test_facets_tie_break_by_name() {
        let catalog = vec![product(1, "b-cat"), product(2, "a-cat")];
        let facets = facets(&catalog);
        assert_eq!(facets[0].name, "a-cat");
        assert_eq!(facets[1].name, "b-cat");
    }

    #[test]
    fn test_facets_of_empty_collection() {
        assert!(facets(&[]).is_empty());
    }
}
