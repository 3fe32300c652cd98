//! Catalog domain types and logic for the Vitrine storefront.
//!
//! This crate holds everything the storefront knows about products
//! independently of how they are fetched or rendered:
//!
//! - **Product**: the wire model mirrored from the catalog API
//! - **Filter**: free-text + category filtering over a fetched collection
//! - **Facet**: distinct category values derived from a collection
//! - **Quantity**: the detail screen's quantity stepper
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let filter = CatalogFilter::new("shirt", CategorySelection::All);
//! let visible = filter.apply(&products);
//! assert!(visible.iter().all(|p| filter.matches(p)));
//! ```

pub mod error;
pub mod facet;
pub mod filter;
pub mod product;
pub mod quantity;

pub use error::CatalogError;
pub use product::{Product, Rating};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::facet::{facets, CategoryFacet};
    pub use crate::filter::{CatalogFilter, CategorySelection};
    pub use crate::product::{Product, Rating};
    pub use crate::quantity::Quantity;
}
