use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ListingId, UserId};
use crate::domains::listings::filters::ListingFilters;
use crate::domains::listings::validate::NewListing;

/// A vehicle listing posted by a seller.
///
/// Location fields are optional: older rows predate the structured location
/// form, and coordinates only exist where the seller picked a known city.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: ListingId,
    pub user_id: UserId,

    // Content
    pub title: String,
    pub description: String,

    // Vehicle
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub transmission: String, // 'automatic', 'manual'
    pub fuel_type: String,    // 'gasoline', 'diesel', 'electric', 'hybrid', 'other'
    pub condition: String,    // 'new', 'used'
    pub colour: Option<String>,

    // Price
    pub price: Decimal,
    pub currency: String,

    // Location
    pub location_city: Option<String>,
    pub location_region: Option<String>,
    pub location_country: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub is_active: bool,
    pub view_count: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub async fn find_by_id(id: ListingId, pool: &PgPool) -> Result<Self> {
        let listing = sqlx::query_as::<_, Listing>("SELECT * FROM car_listings WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(listing)
    }

    /// Coarse pre-filter for search: the equality/range predicates plus the
    /// default newest-first ordering. The in-memory pipeline handles the
    /// rest. `limit`/`offset` are NULL-safe; passing `None` omits them.
    pub async fn find_filtered(
        filters: &ListingFilters,
        limit: Option<i64>,
        offset: Option<i64>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let listings = sqlx::query_as::<_, Listing>(
            "SELECT * FROM car_listings
             WHERE is_active = TRUE
               AND ($1::text IS NULL OR make ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR model ILIKE '%' || $2 || '%')
               AND ($3::numeric IS NULL OR price >= $3)
               AND ($4::numeric IS NULL OR price <= $4)
               AND ($5::int IS NULL OR year >= $5)
               AND ($6::int IS NULL OR year <= $6)
               AND ($7::text IS NULL OR colour ILIKE '%' || $7 || '%')
             ORDER BY created_at DESC
             LIMIT $8 OFFSET $9",
        )
        .bind(filters.make.as_deref())
        .bind(filters.model.as_deref())
        .bind(filters.min_price)
        .bind(filters.max_price)
        .bind(filters.min_year)
        .bind(filters.max_year)
        .bind(filters.colour.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// A seller's own listings, active first, newest first within each group.
    pub async fn find_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let listings = sqlx::query_as::<_, Listing>(
            "SELECT * FROM car_listings
             WHERE user_id = $1
             ORDER BY is_active DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    pub async fn insert(input: &NewListing, user_id: UserId, pool: &PgPool) -> Result<Self> {
        let listing = sqlx::query_as::<_, Listing>(
            "INSERT INTO car_listings (
                 user_id, title, description, make, model, year, mileage,
                 transmission, fuel_type, condition, colour, price, currency,
                 location_city, location_region, location_country,
                 postal_code, latitude, longitude
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16, $17, $18, $19)
             RETURNING *",
        )
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.make)
        .bind(&input.model)
        .bind(input.year)
        .bind(input.mileage)
        .bind(input.transmission.to_string())
        .bind(input.fuel_type.to_string())
        .bind(input.condition.to_string())
        .bind(input.colour.as_deref())
        .bind(input.price)
        .bind(&input.currency)
        .bind(&input.location_city)
        .bind(&input.location_region)
        .bind(&input.location_country)
        .bind(input.postal_code.as_deref())
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }

    pub async fn update(id: ListingId, input: &NewListing, pool: &PgPool) -> Result<Self> {
        let listing = sqlx::query_as::<_, Listing>(
            "UPDATE car_listings SET
                 title = $2, description = $3, make = $4, model = $5,
                 year = $6, mileage = $7, transmission = $8, fuel_type = $9,
                 condition = $10, colour = $11, price = $12, currency = $13,
                 location_city = $14, location_region = $15,
                 location_country = $16, postal_code = $17,
                 latitude = $18, longitude = $19, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.make)
        .bind(&input.model)
        .bind(input.year)
        .bind(input.mileage)
        .bind(input.transmission.to_string())
        .bind(input.fuel_type.to_string())
        .bind(input.condition.to_string())
        .bind(input.colour.as_deref())
        .bind(input.price)
        .bind(&input.currency)
        .bind(&input.location_city)
        .bind(&input.location_region)
        .bind(&input.location_country)
        .bind(input.postal_code.as_deref())
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }

    pub async fn delete(id: ListingId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM car_listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Owning user, for authorization checks before writes.
    pub async fn owner_id(id: ListingId, pool: &PgPool) -> Result<UserId> {
        let owner = sqlx::query_scalar::<_, UserId>(
            "SELECT user_id FROM car_listings WHERE id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(owner)
    }

    pub async fn set_active(id: ListingId, active: bool, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE car_listings SET is_active = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Atomically bump the view counter, returning the new count.
    pub async fn record_view(id: ListingId, pool: &PgPool) -> Result<i32> {
        let count = sqlx::query_scalar::<_, i32>(
            "UPDATE car_listings SET view_count = view_count + 1
             WHERE id = $1
             RETURNING view_count",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

// =============================================================================
// Enums for type-safe input
// =============================================================================

/// Transmission type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transmission::Automatic => write!(f, "automatic"),
            Transmission::Manual => write!(f, "manual"),
        }
    }
}

impl std::str::FromStr for Transmission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "automatic" => Ok(Transmission::Automatic),
            "manual" => Ok(Transmission::Manual),
            _ => Err(anyhow::anyhow!("Invalid transmission: {}", s)),
        }
    }
}

/// Fuel type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Other,
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelType::Gasoline => write!(f, "gasoline"),
            FuelType::Diesel => write!(f, "diesel"),
            FuelType::Electric => write!(f, "electric"),
            FuelType::Hybrid => write!(f, "hybrid"),
            FuelType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for FuelType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gasoline" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            "other" => Ok(FuelType::Other),
            _ => Err(anyhow::anyhow!("Invalid fuel type: {}", s)),
        }
    }
}

/// Vehicle condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Used,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::New => write!(f, "new"),
            Condition::Used => write!(f, "used"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            _ => Err(anyhow::anyhow!("Invalid condition: {}", s)),
        }
    }
}
