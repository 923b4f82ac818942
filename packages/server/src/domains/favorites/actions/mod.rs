pub mod mutations;
pub mod queries;

pub use mutations::{save_favorite, unsave_favorite};
pub use queries::{is_saved, saved_listings};
