//! Catalog API bindings.
//!
//! Read-only GET calls against the public catalog host: one list endpoint,
//! one by-id endpoint. No request body, no auth headers, no pagination.

use vitrine_commerce::{CatalogError, Product};
use vitrine_data::{FetchClient, FetchError};

/// Base URL of the public catalog API.
pub const API_BASE_URL: &str = "https://fakestoreapi.com";

fn client() -> FetchClient {
    FetchClient::new()
        .with_base_url(API_BASE_URL)
        .with_default_header("Accept", "application/json")
}

/// Fetch the full product collection.
pub async fn fetch_products() -> Result<Vec<Product>, CatalogError> {
    let client = client();
    client
        .send(client.get("/products"))
        .await
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json())
        .map_err(|e| map_fetch_error(None, e))
}

/// Fetch a single product by id.
pub async fn fetch_product(id: u64) -> Result<Product, CatalogError> {
    let client = client();
    client
        .send(client.get(format!("/products/{id}")))
        .await
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json())
        .map_err(|e| map_fetch_error(Some(id), e))
}

/// Map a transport-level error to the catalog error a screen displays.
///
/// A 404 on the by-id endpoint becomes the dedicated not-found case; every
/// other failure keeps its own flavor for the error message.
fn map_fetch_error(id: Option<u64>, err: FetchError) -> CatalogError {
    match (id, err) {
        (Some(id), FetchError::HttpError { status: 404, .. }) => {
            CatalogError::ProductNotFound { id }
        }
        (_, FetchError::HttpError { status, .. }) => CatalogError::Http { status },
        (_, FetchError::RequestError(message)) => CatalogError::Transport(message),
        (_, FetchError::ParseError(message)) => CatalogError::Decode(message),
    }
}
