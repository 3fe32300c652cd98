//! Product data model.
//!
//! Mirrors the catalog API's JSON shape verbatim. Products are read-only for
//! the lifetime of a page visit; nothing in the storefront creates, updates,
//! or deletes them.

use serde::{Deserialize, Serialize};

/// A product in the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Price in the catalog's display currency (non-negative).
    pub price: f64,
    /// Full description.
    pub description: String,
    /// Category, used both as a filter facet and a display label.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Customer rating; absent for some catalog entries.
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating value for display, falling back when the catalog omits it.
    pub fn rating_display(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(4.5)
    }

    /// Review count for display, falling back when the catalog omits it.
    pub fn review_count_display(&self) -> u32 {
        self.rating.map(|r| r.count).unwrap_or(120)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_product() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
        assert_eq!(product.price_display(), "$109.95");
    }

    #[test]
    fn test_deserialize_without_rating() {
        let json = r#"{
            "id": 7,
            "title": "White Gold Ring",
            "price": 9.99,
            "description": "Classic Created Wedding Engagement Solitaire",
            "category": "jewelery",
            "image": "https://example.com/71YAIFU48IL.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert_eq!(product.rating_display(), 4.5);
        assert_eq!(product.review_count_display(), 120);
    }

    #[test]
    fn test_price_display_rounds_to_cents() {
        let product = Product {
            id: 2,
            title: "Slim Fit T-Shirt".to_string(),
            price: 22.3,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: None,
        };
        assert_eq!(product.price_display(), "$22.30");
    }
}
