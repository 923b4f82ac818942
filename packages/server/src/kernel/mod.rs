//! Kernel module - infrastructure seams behind the domain layer.

pub mod geocoder;

pub use geocoder::{Coordinates, Geocoder, StaticGeocoder};
