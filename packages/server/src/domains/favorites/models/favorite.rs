use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{FavoriteId, ListingId, UserId};
use crate::domains::listings::models::Listing;

/// A listing saved by a user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub listing_id: ListingId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub async fn insert(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<Self> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, listing_id)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(pool)
        .await?;
        Ok(favorite)
    }

    /// Remove a saved listing; returns whether a row was actually deleted.
    pub async fn delete(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND listing_id = $2")
            .bind(user_id)
            .bind(listing_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(user_id: UserId, listing_id: ListingId, pool: &PgPool) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND listing_id = $2)",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// The user's saved listings, most recently saved first.
    pub async fn listings_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Listing>> {
        let listings = sqlx::query_as::<_, Listing>(
            "SELECT l.* FROM car_listings l
             JOIN favorites f ON f.listing_id = l.id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }
}
