pub mod mutations;
pub mod queries;

pub use mutations::{create_listing, delete_listing, set_listing_active, update_listing};
pub use queries::{get_listing, search_listings, user_listings};
