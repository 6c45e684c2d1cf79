//! Variant reorder policy.
//!
//! A product needs fixing when its "sample" variant sits before its "bolt"
//! variant. The swap is two sequenced writes: move bolt into the lower slot
//! first, then give sample the higher one. Between the writes the remote
//! store briefly holds two variants at the same position; final state is an
//! exact swap with every other variant untouched. There is no rollback: a
//! failed second write leaves the product in that intermediate state.

use std::time::Duration;

use shopsync_types::{Product, Variant};

use crate::client::ShopifyClient;
use crate::error::SyncError;

const SAMPLE_KEYWORD: &str = "sample";
const BOLT_KEYWORD: &str = "bolt";

/// The two writes a swap will perform.
#[derive(Debug, PartialEq, Eq)]
pub struct SwapPlan {
    pub sample_id: i64,
    pub bolt_id: i64,
    pub sample_position: i32,
    pub bolt_position: i32,
}

/// First variant whose title contains `keyword`, case-insensitively.
/// Later matches are deliberately ignored.
fn find_variant<'a>(variants: &'a [Variant], keyword: &str) -> Option<&'a Variant> {
    variants.iter().find(|v| v.title.to_lowercase().contains(keyword))
}

/// Decides whether `product` needs a swap.
///
/// Returns `None` when either classification has no match, or when the
/// sample variant does not sit strictly before the bolt variant.
pub fn swap_plan(product: &Product) -> Option<SwapPlan> {
    let sample = find_variant(&product.variants, SAMPLE_KEYWORD)?;
    let bolt = find_variant(&product.variants, BOLT_KEYWORD)?;
    (sample.position < bolt.position).then(|| SwapPlan {
        sample_id: sample.id,
        bolt_id: bolt.id,
        sample_position: sample.position,
        bolt_position: bolt.position,
    })
}

/// Swaps the sample/bolt positions of `product` if needed.
///
/// Returns `Ok(true)` when a swap was performed, `Ok(false)` when the
/// product was already in order (zero writes). `pacing_delay` is slept
/// after each write to stay under the store's rate limit.
///
/// # Errors
///
/// A write failure propagates immediately, aborting the reorder for this
/// product with no compensating rollback.
pub async fn reorder_if_needed(
    client: &ShopifyClient,
    product: &Product,
    pacing_delay: Duration,
) -> Result<bool, SyncError> {
    let Some(plan) = swap_plan(product) else {
        return Ok(false);
    };

    tracing::info!(
        product_id = product.id,
        title = %product.title,
        sample_position = plan.sample_position,
        bolt_position = plan.bolt_position,
        "reordering: sample listed before bolt"
    );

    // Vacate the lower slot first by moving bolt into it, then assign the
    // displaced lower value's old holder to the higher slot.
    client.update_variant_position(plan.bolt_id, plan.sample_position).await?;
    tokio::time::sleep(pacing_delay).await;
    client.update_variant_position(plan.sample_id, plan.bolt_position).await?;
    tokio::time::sleep(pacing_delay).await;

    tracing::info!(product_id = product.id, "reorder complete");
    Ok(true)
}
