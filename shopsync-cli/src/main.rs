//! Shopsync CLI
//!
//! One-shot run: walk the store's product catalog and swap any "sample"
//! variant listed before its "bolt" sibling.
//!
//! Configuration comes from the environment (or a `.env` file):
//! `SHOPIFY_STORE`, `SHOPIFY_ACCESS_TOKEN`, optional `SHOPIFY_API_VERSION`.

use anyhow::{Context, Result};
use shopsync_core::ShopifyClient;
use shopsync_types::SyncConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SyncConfig::from_env().context("loading configuration")?;
    let client = ShopifyClient::new(&config).context("building HTTP client")?;

    info!(base_url = %config.base_url, "starting variant order sync");

    match shopsync_core::run(&client, &config).await {
        Ok(summary) => {
            info!(
                pages = summary.pages,
                products = summary.products,
                reordered = summary.reordered,
                "sync complete"
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "sync aborted");
            std::process::exit(1);
        }
    }
}
