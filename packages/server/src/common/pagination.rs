//! Offset-based pagination types.
//!
//! Listing search filters part of the result set in the application layer
//! after a capped fetch, so exact totals are not available. `PageInfo`
//! therefore reports an estimate: `has_next_page` is true whenever the page
//! came back exactly full, which can over-report by one page at the end of
//! a result set.

use serde::Serialize;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

// ============================================================================
// PageInfo
// ============================================================================

/// Pagination metadata for a page of results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageInfo {
    /// Whether another page is believed to exist. Heuristic: true when the
    /// current page is exactly full.
    pub has_next_page: bool,
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Build a page from the sliced items and the limit that produced them.
    ///
    /// With no limit there is nothing to infer from, so `has_next_page`
    /// stays false.
    pub fn from_items(items: Vec<T>, limit: Option<i64>) -> Self {
        let has_next_page = match limit {
            Some(limit) if limit > 0 => items.len() as i64 == limit,
            _ => false,
        };
        Page {
            items,
            page_info: PageInfo { has_next_page },
        }
    }

    /// An empty page.
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// Reject out-of-range limit/offset values before they reach a query.
pub fn validate_page_args(limit: Option<i64>, offset: Option<i64>) -> anyhow::Result<()> {
    if let Some(limit) = limit {
        if limit < 1 {
            anyhow::bail!("limit must be at least 1, got {}", limit);
        }
        if limit > MAX_PAGE_SIZE {
            anyhow::bail!("limit must be at most {}, got {}", MAX_PAGE_SIZE, limit);
        }
    }
    if let Some(offset) = offset {
        if offset < 0 {
            anyhow::bail!("offset cannot be negative, got {}", offset);
        }
    }
    Ok(())
}
