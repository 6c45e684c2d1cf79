//! Authenticated transport for the Shopify Admin API.
//!
//! One client, one store, one credential. Reads and writes both go through
//! the backoff retrier: Shopify's rate limit is global per store, so a 429
//! on a PUT is just as recoverable as one on a GET.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use shopsync_types::SyncConfig;

use crate::error::SyncError;
use crate::retry::retry_on_rate_limit;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

pub struct ShopifyClient {
    client: Client,
    config: SyncConfig,
}

impl ShopifyClient {
    /// Builds a client for the store and credential in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &SyncConfig) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config: config.clone() })
    }

    /// GET with 429 backoff. Returns the response body and headers.
    ///
    /// `path_and_query` is relative to the base endpoint, e.g.
    /// `products.json?limit=250`.
    ///
    /// # Errors
    ///
    /// [`SyncError::RequestFailed`] for non-2xx responses (including an
    /// exhausted retry budget), [`SyncError::Http`] for transport failures.
    pub async fn get_with_retry(
        &self,
        path_and_query: &str,
    ) -> Result<(String, HeaderMap), SyncError> {
        retry_on_rate_limit(&self.config.retry, || self.get_once(path_and_query)).await
    }

    /// PUT `variants/{id}.json` assigning a new position, with 429 backoff.
    ///
    /// The response body is not consumed; any 2xx status is success.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::get_with_retry`].
    pub async fn update_variant_position(
        &self,
        variant_id: i64,
        position: i32,
    ) -> Result<(), SyncError> {
        retry_on_rate_limit(&self.config.retry, || self.put_position_once(variant_id, position))
            .await
    }

    async fn get_once(&self, path_and_query: &str) -> Result<(String, HeaderMap), SyncError> {
        let resp = self
            .client
            .get(format!("{}{}", self.config.base_url, path_and_query))
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::RateLimited { body });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::RequestFailed { status: status.as_u16(), body });
        }

        let headers = resp.headers().clone();
        let body = resp.text().await?;
        Ok((body, headers))
    }

    async fn put_position_once(&self, variant_id: i64, position: i32) -> Result<(), SyncError> {
        let resp = self
            .client
            .put(format!("{}variants/{}.json", self.config.base_url, variant_id))
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "variant": { "id": variant_id, "position": position }
            }))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::RateLimited { body });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::RequestFailed { status: status.as_u16(), body });
        }
        Ok(())
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}
