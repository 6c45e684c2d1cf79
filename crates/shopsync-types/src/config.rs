//! Run configuration.
//!
//! All timing knobs (retry backoff, pacing delay) live here so tests can
//! shrink them; production defaults match the Shopify Admin API rate-limit
//! guidance the tool was written against.

use crate::error::ConfigError;

/// Admin API version used when `SHOPIFY_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "2023-10";

/// Products fetched per listing request (Shopify's maximum).
pub const DEFAULT_PAGE_SIZE: u32 = 250;

/// Delay after each reorder write, in milliseconds.
pub const DEFAULT_PACING_DELAY_MS: u64 = 1000;

/// Retry policy for rate-limited (429) requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Additional attempts after the initial call. The initial call is not
    /// counted, so exhaustion means `max_retries + 1` calls total.
    pub max_retries: u32,
    /// Delay before the first retry; doubles after each retry.
    pub initial_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 5, initial_delay_ms: 1000 }
    }
}

/// Configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base endpoint, with trailing slash:
    /// `https://{store}.myshopify.com/admin/api/{version}/`.
    pub base_url: String,
    /// Value for the `X-Shopify-Access-Token` header.
    pub access_token: String,
    /// Products requested per page.
    pub page_size: u32,
    /// Delay after each reorder write.
    pub pacing_delay_ms: u64,
    /// HTTP request timeout.
    pub timeout_secs: u64,
    /// 429 backoff policy.
    pub retry: RetryConfig,
}

impl SyncConfig {
    /// Loads configuration from the environment.
    ///
    /// Requires `SHOPIFY_STORE` and `SHOPIFY_ACCESS_TOKEN`; honours
    /// `SHOPIFY_API_VERSION` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required variable is absent
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store = required_var("SHOPIFY_STORE")?;
        let access_token = required_var("SHOPIFY_ACCESS_TOKEN")?;
        let api_version = std::env::var("SHOPIFY_API_VERSION")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            base_url: format!("https://{store}.myshopify.com/admin/api/{api_version}/"),
            access_token,
            page_size: DEFAULT_PAGE_SIZE,
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            timeout_secs: 30,
            retry: RetryConfig::default(),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingVar { name: name.to_string() })
}
