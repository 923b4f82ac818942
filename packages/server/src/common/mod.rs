// Common types and utilities shared across the application

pub mod ids;
pub mod pagination;

pub use ids::{FavoriteId, ListingId, UserId};
pub use pagination::{Page, PageInfo};
