//! # Shopsync Core
//!
//! Sync logic for the Shopify variant order synchronizer.
//!
//! ```text
//! shopsync-core/src/
//! ├── client.rs   # Authenticated transport over reqwest (GET/PUT)
//! ├── retry.rs    # Exponential backoff for rate-limited requests
//! ├── pager.rs    # Link-header cursor pagination as a lazy page stream
//! ├── reorder.rs  # Sample/bolt classification and two-step position swap
//! ├── run.rs      # Orchestrator: pages -> products -> reorder policy
//! └── error.rs    # Error taxonomy
//! ```
//!
//! Everything runs on a single task: network calls and pacing delays are the
//! only suspension points, and products are processed strictly in order. The
//! remote rate limit is global per store, so there is deliberately no
//! concurrent fan-out.

pub mod client;
pub mod error;
pub mod pager;
pub mod reorder;
pub mod retry;
pub mod run;

pub use client::ShopifyClient;
pub use error::SyncError;
pub use run::{run, RunSummary};
