//! Write-side actions for the listings domain.
//!
//! Authentication itself lives with the external identity provider; these
//! actions receive an already-verified `UserId` and enforce ownership.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::common::{ListingId, UserId};
use crate::domains::listings::models::Listing;
use crate::domains::listings::validate::NewListing;

pub async fn create_listing(
    user_id: UserId,
    input: NewListing,
    pool: &PgPool,
) -> Result<Listing> {
    input.validate()?;

    let listing = Listing::insert(&input, user_id, pool)
        .await
        .context("Failed to create listing")?;
    tracing::info!(listing_id = %listing.id, user_id = %user_id, "listing created");
    Ok(listing)
}

pub async fn update_listing(
    user_id: UserId,
    id: ListingId,
    input: NewListing,
    pool: &PgPool,
) -> Result<Listing> {
    input.validate()?;
    ensure_owner(user_id, id, pool).await?;

    let listing = Listing::update(id, &input, pool)
        .await
        .context("Failed to update listing")?;
    tracing::info!(listing_id = %id, "listing updated");
    Ok(listing)
}

pub async fn delete_listing(user_id: UserId, id: ListingId, pool: &PgPool) -> Result<()> {
    ensure_owner(user_id, id, pool).await?;

    Listing::delete(id, pool)
        .await
        .context("Failed to delete listing")?;
    tracing::info!(listing_id = %id, "listing deleted");
    Ok(())
}

/// Toggle a listing on or off the marketplace without deleting it.
pub async fn set_listing_active(
    user_id: UserId,
    id: ListingId,
    active: bool,
    pool: &PgPool,
) -> Result<()> {
    ensure_owner(user_id, id, pool).await?;

    Listing::set_active(id, active, pool)
        .await
        .context("Failed to change listing status")?;
    tracing::info!(listing_id = %id, active, "listing status changed");
    Ok(())
}

async fn ensure_owner(user_id: UserId, id: ListingId, pool: &PgPool) -> Result<()> {
    let owner = Listing::owner_id(id, pool)
        .await
        .with_context(|| format!("Listing {} not found", id))?;
    if owner != user_id {
        anyhow::bail!("Listing {} does not belong to the current user", id);
    }
    Ok(())
}
