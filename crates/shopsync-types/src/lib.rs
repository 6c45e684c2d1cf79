//! # Shopsync Types
//!
//! Data model and configuration types for the shopsync workspace.
//!
//! - **`models`** - Shopify Admin API payload types (products, variants)
//! - **`config`** - Run configuration (endpoint, paging, retry, pacing)
//! - **`error`** - Configuration error type
//!
//! This crate sits at the bottom of the dependency graph; `shopsync-core`
//! builds the sync pipeline on top of it.

pub mod config;
pub mod error;
pub mod models;

pub use config::{RetryConfig, SyncConfig};
pub use error::ConfigError;
pub use models::{Product, ProductsPage, Variant};
