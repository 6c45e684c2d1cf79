//! Cursor pagination over the product listing.
//!
//! Shopify communicates continuation through a `link` response header of
//! comma-separated `<url>; rel="relation"` entries. Only the `rel="next"`
//! entry matters: its `page_info` query parameter is the opaque cursor for
//! the next page. Cursor pagination (rather than offset) matters here
//! because our own reorder writes mutate the catalog between pages.

use async_stream::try_stream;
use futures::Stream;
use shopsync_types::{Product, ProductsPage};
use url::Url;

use crate::client::ShopifyClient;
use crate::error::SyncError;

/// One batch of products, tagged with its 1-based page number for progress
/// reporting.
#[derive(Debug)]
pub struct ProductPage {
    pub number: u32,
    pub products: Vec<Product>,
}

/// Lazy sequence of product pages.
///
/// Pagination state (current query, page number) is threaded through the
/// stream's own loop; the sequence is restartable from scratch but not
/// resumable mid-run. Terminates when a page has no products or no
/// `rel="next"` link; any fetch failure (after retry exhaustion) ends the
/// stream with an `Err` item.
pub fn pages(
    client: &ShopifyClient,
    page_size: u32,
) -> impl Stream<Item = Result<ProductPage, SyncError>> + '_ {
    try_stream! {
        let mut query = format!("products.json?limit={page_size}");
        let mut page_number = 0u32;

        loop {
            let (body, headers) = client.get_with_retry(&query).await?;
            let page: ProductsPage = serde_json::from_str(&body)
                .map_err(|e| SyncError::InvalidResponse(e.to_string()))?;
            if page.products.is_empty() {
                break;
            }

            page_number += 1;
            yield ProductPage { number: page_number, products: page.products };

            let link = headers.get("link").and_then(|v| v.to_str().ok());
            match extract_next_cursor(link) {
                Some(cursor) => {
                    query = format!("products.json?limit={page_size}&page_info={cursor}");
                }
                None => break,
            }
        }
    }
}

/// Parses a multi-valued `link` header into `(relation, url)` pairs.
///
/// Entries the grammar doesn't fit are skipped rather than failing the
/// header: a missing `next` relation just terminates paging.
pub fn parse_link_header(value: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for part in value.split(',') {
        let Some(rest) = part.trim().strip_prefix('<') else {
            continue;
        };
        let Some((url, params)) = rest.split_once('>') else {
            continue;
        };
        for param in params.split(';') {
            if let Some(rel) = param.trim().strip_prefix("rel=") {
                entries.push((rel.trim_matches('"').to_string(), url.to_string()));
            }
        }
    }
    entries
}

/// Extracts the continuation cursor from a `link` header, if any.
///
/// Looks for the first `rel="next"` entry and returns its `page_info` query
/// parameter. Absent header, absent relation, unparsable URL, or missing
/// parameter all mean "no further pages".
pub fn extract_next_cursor(link_header: Option<&str>) -> Option<String> {
    let header = link_header?;
    let next_url = parse_link_header(header)
        .into_iter()
        .find_map(|(rel, url)| (rel == "next").then_some(url))?;
    let parsed = Url::parse(&next_url).ok()?;
    parsed
        .query_pairs()
        .find_map(|(key, value)| (key == "page_info").then(|| value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_cursor_from_next_link() {
        let header = r#"<https://x/products.json?limit=250&page_info=ABC123>; rel="next""#;
        assert_eq!(extract_next_cursor(Some(header)), Some("ABC123".to_string()));
    }

    #[test]
    fn picks_next_among_multiple_relations() {
        let header = concat!(
            r#"<https://x/products.json?limit=250&page_info=PREV>; rel="previous", "#,
            r#"<https://x/products.json?limit=250&page_info=NEXT>; rel="next""#,
        );
        assert_eq!(extract_next_cursor(Some(header)), Some("NEXT".to_string()));
    }

    #[test]
    fn tolerates_reordered_entries_and_extra_params() {
        let header = concat!(
            r#"<https://x/products.json?page_info=NEXT&limit=50&fields=id>; rel="next", "#,
            r#"<https://x/products.json?page_info=PREV&limit=50>; rel="previous""#,
        );
        assert_eq!(extract_next_cursor(Some(header)), Some("NEXT".to_string()));
    }

    #[test]
    fn no_next_relation_means_no_cursor() {
        let header = r#"<https://x/products.json?page_info=PREV>; rel="previous""#;
        assert_eq!(extract_next_cursor(Some(header)), None);
        assert_eq!(extract_next_cursor(None), None);
    }

    #[test]
    fn next_link_without_page_info_means_no_cursor() {
        let header = r#"<https://x/products.json?limit=250>; rel="next""#;
        assert_eq!(extract_next_cursor(Some(header)), None);
    }

    #[test]
    fn unparsable_url_means_no_cursor() {
        let header = r#"<not a url>; rel="next""#;
        assert_eq!(extract_next_cursor(Some(header)), None);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let header = concat!(
            r#"garbage, <https://x/p.json?page_info=OK>; rel="next"; title="page 2""#,
        );
        assert_eq!(extract_next_cursor(Some(header)), Some("OK".to_string()));
    }

    #[test]
    fn parse_link_header_collects_all_relations() {
        let header = concat!(
            r#"<https://x/a>; rel="previous", "#,
            r#"<https://x/b>; rel="next""#,
        );
        let entries = parse_link_header(header);
        assert_eq!(
            entries,
            vec![
                ("previous".to_string(), "https://x/a".to_string()),
                ("next".to_string(), "https://x/b".to_string()),
            ]
        );
    }
}
