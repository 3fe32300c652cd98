//! HTTP client utilities for the Vitrine storefront.
//!
//! Provides a small, ergonomic API for making HTTP requests with automatic
//! JSON handling. On `wasm32-unknown-unknown` the underlying `reqwest`
//! client drives the browser `fetch` API; on native targets it uses the
//! regular client, which keeps this crate testable on the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     id: u64,
//!     title: String,
//! }
//!
//! let client = FetchClient::new().with_base_url("https://fakestoreapi.com");
//!
//! let products: Vec<Product> = client
//!     .send(client.get("/products").accept("application/json"))
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
///
/// A thin wrapper around `reqwest` that provides a builder API for
/// constructing requests and a typed [`Response`].
#[derive(Clone, Default)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    inner: reqwest::Client,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that relative request paths are
    /// resolved against.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a request with an arbitrary method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, url).headers(self.default_headers.clone())
    }

    /// Send a request and collect the full response.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = self.resolve_url(&request.url);
        tracing::debug!(method = request.method.as_str(), url = %url, "sending request");

        let mut outgoing = self.inner.request(request.method.to_reqwest(), &url);
        for (key, value) in &request.headers {
            outgoing = outgoing.header(key.as_str(), value.as_str());
        }

        let incoming = outgoing
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = incoming.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in incoming.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        let body = incoming
            .bytes()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?
            .to_vec();

        if status >= 400 {
            tracing::warn!(status, url = %url, "request returned error status");
        }

        Ok(Response::new(status, headers, body))
    }

    /// Resolve a request URL against the base URL, if one is set.
    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        match &self.base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/')),
            None => url.to_string(),
        }
    }
}
