//! Static reference data behind the search forms: Canadian locations,
//! province name handling, and the vehicle make/model catalog.

pub mod locations;
pub mod makes;
pub mod regions;

pub use locations::{filter_locations, LocationEntry, CANADIAN_LOCATIONS};
pub use makes::{find_make, models_for_make, CarMake, CAR_MAKES};
