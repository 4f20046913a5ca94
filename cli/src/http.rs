//! `reqwest` transport for the storefront backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::header::AUTHORIZATION;
use storefront::api::{self as rest, ApiError, StorefrontApi};
use storefront::{Credentials, LoginResponse, NewProduct, Product, ProductId};

#[derive(Clone, Debug)]
pub struct ReqwestApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestApi {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }

    fn url(&self, path: &str) -> String {
        rest::endpoint(&self.base_url, path)
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let resp = request.send().await.map_err(network_error)?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

#[async_trait::async_trait(?Send)]
impl StorefrontApi for ReqwestApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let resp = send(self.client.get(self.url(rest::PRODUCTS_PATH))).await?;
        resp.json::<Vec<Product>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        send(self.client.post(self.url(rest::REGISTER_PATH)).json(credentials)).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let resp = send(self.client.post(self.url(rest::LOGIN_PATH)).json(credentials)).await?;
        resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_product(&self, token: &str, product: &NewProduct) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url(rest::PRODUCTS_PATH))
            .header(AUTHORIZATION, rest::bearer(token))
            .json(product);
        send(request).await?;
        Ok(())
    }

    async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.url(&rest::product_path(id)))
            .header(AUTHORIZATION, rest::bearer(token));
        send(request).await?;
        Ok(())
    }

    async fn buy_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url(&rest::buy_path(id)))
            .header(AUTHORIZATION, rest::bearer(token))
            .json(&serde_json::json!({}));
        send(request).await?;
        Ok(())
    }
}
