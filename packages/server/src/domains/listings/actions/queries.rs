//! Read-side actions for the listings domain.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::common::pagination::{validate_page_args, Page};
use crate::common::{ListingId, UserId};
use crate::domains::listings::filters::ListingFilters;
use crate::domains::listings::models::Listing;
use crate::domains::listings::search;
use crate::kernel::geocoder::Geocoder;

/// Search active listings.
///
/// The row source handles the coarse predicates and newest-first ordering.
/// When a stage has to run in memory (free text, location, distance, or an
/// explicit sort), the fetch is capped at `fetch_limit` and the pipeline
/// does its own pagination; otherwise limit/offset are pushed down to SQL.
pub async fn search_listings(
    filters: &ListingFilters,
    fetch_limit: i64,
    geocoder: &dyn Geocoder,
    pool: &PgPool,
) -> Result<Page<Listing>> {
    validate_page_args(filters.limit, filters.offset)?;

    if filters.needs_in_memory_pass() {
        let rows = Listing::find_filtered(filters, Some(fetch_limit), None, pool)
            .await
            .context("Failed to fetch listings for search")?;
        let items = search::apply(rows, filters, geocoder);
        Ok(Page::from_items(items, filters.limit))
    } else {
        let rows = Listing::find_filtered(filters, filters.limit, filters.offset, pool)
            .await
            .context("Failed to fetch listings")?;
        Ok(Page::from_items(rows, filters.limit))
    }
}

/// Fetch one listing and count the view.
///
/// The counter bump is atomic in the database. If it fails the page still
/// renders, so a counting problem only gets logged.
pub async fn get_listing(id: ListingId, pool: &PgPool) -> Result<Listing> {
    let mut listing = Listing::find_by_id(id, pool)
        .await
        .with_context(|| format!("Listing {} not found", id))?;

    match Listing::record_view(id, pool).await {
        Ok(count) => listing.view_count = count,
        Err(error) => {
            tracing::warn!(listing_id = %id, %error, "failed to record listing view");
        }
    }

    Ok(listing)
}

/// A seller's own listings, active first, newest first within each group.
pub async fn user_listings(user_id: UserId, pool: &PgPool) -> Result<Vec<Listing>> {
    Listing::find_for_user(user_id, pool)
        .await
        .context("Failed to fetch user listings")
}
