//! REST client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded into `ApiError::Status` carrying the
//! backend's `error` string so actions can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use storefront::api::{self as rest, ApiError, StorefrontApi};
use storefront::{Credentials, DEFAULT_API_URL, LoginResponse, NewProduct, Product, ProductId};

/// Backend base URL, fixed at build time by `FLASHMART_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("FLASHMART_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Browser transport for [`StorefrontApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at [`api_base_url`].
    pub fn from_env() -> Self {
        Self::new(api_base_url())
    }

    fn url(&self, path: &str) -> String {
        rest::endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &T,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder.json(body).map_err(network_error)?.send().await.map_err(network_error)?;
    ensure_ok(resp).await
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[async_trait::async_trait(?Send)]
impl StorefrontApi for HttpApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(rest::PRODUCTS_PATH))
                .send()
                .await
                .map_err(network_error)?;
            let resp = ensure_ok(resp).await?;
            resp.json::<Vec<Product>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(rest::PRODUCTS_PATH);
            Err(unavailable())
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(rest::REGISTER_PATH));
            send_json(builder, credentials).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(rest::LOGIN_PATH));
            let resp = send_json(builder, credentials).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn create_product(&self, token: &str, product: &NewProduct) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(rest::PRODUCTS_PATH))
                .header("Authorization", &rest::bearer(token));
            send_json(builder, product).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, product);
            Err(unavailable())
        }
    }

    async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(&rest::product_path(id)))
                .header("Authorization", &rest::bearer(token))
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(unavailable())
        }
    }

    async fn buy_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(&rest::buy_path(id)))
                .header("Authorization", &rest::bearer(token));
            send_json(builder, &serde_json::json!({})).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(unavailable())
        }
    }
}
