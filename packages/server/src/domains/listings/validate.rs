//! Input validation for listing submissions.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::listings::models::{Condition, FuelType, Transmission};

/// Earliest model year a listing may carry.
pub const MIN_YEAR: i32 = 1900;

/// Why a listing submission was rejected. Messages are user-facing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be at least 5 characters")]
    TitleTooShort,
    #[error("Description must be at least 20 characters")]
    DescriptionTooShort,
    #[error("Make is required")]
    MakeRequired,
    #[error("Model is required")]
    ModelRequired,
    #[error("Year must be between 1900 and {0}")]
    YearOutOfRange(i32),
    #[error("Mileage cannot be negative")]
    NegativeMileage,
    #[error("Price must be positive")]
    NonPositivePrice,
    #[error("City is required")]
    CityRequired,
    #[error("Province/State is required")]
    RegionRequired,
    #[error("Country is required")]
    CountryRequired,
}

/// A listing as submitted by a seller, before it has an ID or timestamps.
///
/// Enum fields are already closed sets; `validate` covers everything the
/// type system cannot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub condition: Condition,
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub location_city: String,
    pub location_region: String,
    pub location_country: String,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_currency() -> String {
    "CAD".to_string()
}

impl NewListing {
    /// Check every submission rule, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().chars().count() < 5 {
            return Err(ValidationError::TitleTooShort);
        }
        if self.description.trim().chars().count() < 20 {
            return Err(ValidationError::DescriptionTooShort);
        }
        if self.make.trim().is_empty() {
            return Err(ValidationError::MakeRequired);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::ModelRequired);
        }
        // Next year's models show up on lots before January
        let max_year = Utc::now().year() + 1;
        if self.year < MIN_YEAR || self.year > max_year {
            return Err(ValidationError::YearOutOfRange(max_year));
        }
        if self.mileage < 0 {
            return Err(ValidationError::NegativeMileage);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.location_city.trim().is_empty() {
            return Err(ValidationError::CityRequired);
        }
        if self.location_region.trim().is_empty() {
            return Err(ValidationError::RegionRequired);
        }
        if self.location_country.trim().is_empty() {
            return Err(ValidationError::CountryRequired);
        }
        Ok(())
    }
}
