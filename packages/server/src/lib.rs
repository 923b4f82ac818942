// Car Marketplace - API Core
//
// Backend library for a Canadian vehicle marketplace: listing storage and
// search, saved listings, and the static location/vehicle catalogs behind
// the search forms. Auth, file storage, and page rendering live with
// external services; this crate owns the data layer and the listing search
// pipeline.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
