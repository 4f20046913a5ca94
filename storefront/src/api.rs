//! Backend REST contract and transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` implements [`StorefrontApi`] over `gloo-net` in the browser and
//! `cli` implements it over `reqwest`. Both share the paths, auth header and
//! error decoding defined here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::types::{Credentials, ErrorBody, LoginResponse, NewProduct, Product, ProductId};

/// Backend base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

pub const PRODUCTS_PATH: &str = "/products";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Error returned by a [`StorefrontApi`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("server returned {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, if it had one.
        message: Option<String>,
    },
    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a failed response's raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    /// The server-provided error string, if the backend sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Path of a single product, e.g. `/products/7`.
#[must_use]
pub fn product_path(id: ProductId) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// Path of the purchase endpoint for a product, e.g. `/buy/7`.
#[must_use]
pub fn buy_path(id: ProductId) -> String {
    format!("/buy/{id}")
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Transport-neutral async trait for the backend. Enables mocking in tests.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[async_trait::async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /products`.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /register`.
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /products` with a bearer token.
    async fn create_product(&self, token: &str, product: &NewProduct) -> Result<(), ApiError>;

    /// `DELETE /products/:id` with a bearer token.
    async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), ApiError>;

    /// `POST /buy/:id` with a bearer token and an empty JSON object body.
    async fn buy_product(&self, token: &str, id: ProductId) -> Result<(), ApiError>;
}
