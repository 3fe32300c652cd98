//! Catalog error types.

use thiserror::Error;

/// Errors that can surface on a storefront screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no product with this id.
    #[error("Product not found: {id}")]
    ProductNotFound { id: u64 },

    /// The catalog API answered with a non-success status.
    #[error("Catalog API returned HTTP {status}")]
    Http { status: u16 },

    /// The request never completed (network failure, invalid URL).
    #[error("Failed to reach the catalog API: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Whether this error is the not-found case, which screens surface
    /// with a dedicated message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ProductNotFound { .. })
    }
}
