//! Shopify Admin API payload types for the `products.json` endpoint.
//!
//! Products and variants are per-page snapshots: they are deserialized from
//! one listing response, inspected once, and discarded. Nothing here is
//! cached across pages, because reorder writes mutate the catalog between
//! page fetches.

use serde::Deserialize;

/// Top-level response from `GET products.json`.
///
/// `products` defaults to an empty list so that an absent field terminates
/// paging the same way an empty page does.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A single product from the Admin API listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Shopify numeric product ID.
    pub id: i64,

    /// Display title of the product.
    pub title: String,

    /// Purchasable variants, in the store's display order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A single purchasable variant of a [`Product`].
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    /// Shopify numeric variant ID.
    pub id: i64,

    /// Display title of the variant. Free text; classification matches on
    /// case-insensitive substrings.
    pub title: String,

    /// 1-based ordinal among the product's variants. Unique within a product
    /// at rest; transiently duplicated in the remote store mid-swap.
    pub position: i32,
}
