//! Write-side actions for saved listings.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::common::{ListingId, UserId};
use crate::domains::favorites::models::Favorite;

pub async fn save_favorite(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<()> {
    // Check first so the caller gets a clear message instead of a
    // unique-constraint error
    if Favorite::exists(user_id, listing_id, pool).await? {
        anyhow::bail!("Listing is already saved");
    }

    Favorite::insert(user_id, listing_id, pool)
        .await
        .context("Failed to save listing")?;
    tracing::info!(listing_id = %listing_id, user_id = %user_id, "listing saved");
    Ok(())
}

pub async fn unsave_favorite(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<()> {
    let removed = Favorite::delete(user_id, listing_id, pool)
        .await
        .context("Failed to unsave listing")?;
    if removed {
        tracing::info!(listing_id = %listing_id, user_id = %user_id, "listing unsaved");
    }
    Ok(())
}
