pub mod actions;
pub mod filters;
pub mod models;
pub mod search;
pub mod validate;

// Re-export models and filter types
pub use filters::{ListingFilters, SortBy, SortOrder};
pub use models::listing::{Condition, FuelType, Listing, Transmission};
pub use validate::{NewListing, ValidationError};
