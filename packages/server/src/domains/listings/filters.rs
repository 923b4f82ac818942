//! Search filter parameters for listing queries.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sort keys accepted by listing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Price,
    Year,
    Mileage,
    CreatedAt,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Price => write!(f, "price"),
            SortBy::Year => write!(f, "year"),
            SortBy::Mileage => write!(f, "mileage"),
            SortBy::CreatedAt => write!(f, "created_at"),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "price" => Ok(SortBy::Price),
            "year" => Ok(SortBy::Year),
            "mileage" => Ok(SortBy::Mileage),
            "created_at" => Ok(SortBy::CreatedAt),
            _ => Err(anyhow::anyhow!("Invalid sort key: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(anyhow::anyhow!("Invalid sort order: {}", s)),
        }
    }
}

/// Filter, sort, and pagination parameters for a listing search.
///
/// Every field is optional; an absent field applies no constraint. `make`,
/// `model`, `colour`, and the price/year bounds are pushed down to the row
/// source; the remaining fields drive the in-memory pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Free-text search across title, description, make, model, and location.
    pub search: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Location query, either "city" or "city, region".
    pub location: Option<String>,
    /// Radius in kilometres around `location`. When set, distance filtering
    /// replaces the location-string filter.
    pub distance: Option<f64>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub colour: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListingFilters {
    /// True when some stage must run in the application layer, in which case
    /// pagination cannot be pushed down to the row source either.
    pub fn needs_in_memory_pass(&self) -> bool {
        self.search.is_some() || self.location.is_some() || self.sort_by.is_some()
    }

    /// The distance radius, when distance filtering is actually in effect
    /// (a location plus a positive radius).
    pub fn distance_radius(&self) -> Option<f64> {
        match (self.location.as_deref(), self.distance) {
            (Some(_), Some(radius)) if radius > 0.0 => Some(radius),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        let key: SortBy = "created_at".parse().unwrap();
        assert_eq!(key, SortBy::CreatedAt);
        assert_eq!(key.to_string(), "created_at");
        assert!("views".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_empty_filters_need_no_in_memory_pass() {
        assert!(!ListingFilters::default().needs_in_memory_pass());
    }

    #[test]
    fn test_distance_radius_requires_location() {
        let mut filters = ListingFilters {
            distance: Some(25.0),
            ..Default::default()
        };
        assert_eq!(filters.distance_radius(), None);

        filters.location = Some("Toronto".to_string());
        assert_eq!(filters.distance_radius(), Some(25.0));

        filters.distance = Some(0.0);
        assert_eq!(filters.distance_radius(), None);
    }
}
