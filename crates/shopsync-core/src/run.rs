//! Orchestrator: drives the pager and applies the reorder policy.

use std::time::Duration;

use shopsync_types::SyncConfig;
use tokio_stream::StreamExt;

use crate::client::ShopifyClient;
use crate::error::SyncError;
use crate::{pager, reorder};

/// Counters reported at the end of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: u32,
    pub products: u64,
    pub reordered: u64,
}

/// Processes the whole catalog: every page, every product, in order.
///
/// Fully sequential by design; the store's rate limit is global, so
/// concurrent writes would reintroduce the races the pacing delays avoid.
///
/// # Errors
///
/// The first unrecovered failure anywhere in the pipeline aborts the run.
pub async fn run(client: &ShopifyClient, config: &SyncConfig) -> Result<RunSummary, SyncError> {
    let pacing_delay = Duration::from_millis(config.pacing_delay_ms);
    let stream = pager::pages(client, config.page_size);
    tokio::pin!(stream);

    let mut summary = RunSummary::default();
    while let Some(page) = stream.next().await {
        let page = page?;
        tracing::info!(
            page = page.number,
            products = page.products.len(),
            "processing page"
        );
        summary.pages = page.number;

        for product in &page.products {
            if reorder::reorder_if_needed(client, product, pacing_delay).await? {
                summary.reordered += 1;
            }
            summary.products += 1;
        }
    }

    tracing::info!(
        pages = summary.pages,
        products = summary.products,
        reordered = summary.reordered,
        "finished processing all products"
    );
    Ok(summary)
}
