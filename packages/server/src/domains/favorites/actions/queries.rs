//! Read-side actions for saved listings.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::common::{ListingId, UserId};
use crate::domains::favorites::models::Favorite;
use crate::domains::listings::models::Listing;

/// The user's saved listings, most recently saved first.
pub async fn saved_listings(user_id: UserId, pool: &PgPool) -> Result<Vec<Listing>> {
    Favorite::listings_for_user(user_id, pool)
        .await
        .context("Failed to fetch saved listings")
}

/// Whether the user has saved this listing (drives the heart toggle).
pub async fn is_saved(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<bool> {
    Favorite::exists(user_id, listing_id, pool)
        .await
        .context("Failed to check saved state")
}
