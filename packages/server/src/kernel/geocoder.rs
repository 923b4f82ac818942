//! Place-name resolution for distance search.
//!
//! The trait is the seam: search code only ever sees `&dyn Geocoder`, so
//! tests can substitute a stub and a future online geocoder can drop in
//! without touching the pipeline.

use crate::domains::catalog::locations::CANADIAN_LOCATIONS;
use crate::domains::catalog::regions;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Maps a free-form place string ("Toronto", "toronto, on") to coordinates.
///
/// Returning `None` means "unknown place"; it is never an error.
pub trait Geocoder: Send + Sync {
    fn resolve(&self, location: &str) -> Option<Coordinates>;
}

/// Geocoder backed by the static Canadian city table. Pure lookup, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGeocoder;

impl StaticGeocoder {
    pub fn new() -> Self {
        StaticGeocoder
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, location: &str) -> Option<Coordinates> {
        let (city, region) = split_location(location);
        if city.is_empty() {
            return None;
        }

        // Exact city name first, honoring the region when one was given.
        let exact = CANADIAN_LOCATIONS.iter().find(|entry| {
            entry.city.to_lowercase() == city
                && region
                    .as_deref()
                    .map(|r| regions::canonical(entry.region) == *r)
                    .unwrap_or(true)
        });
        if let Some(entry) = exact {
            return Some(Coordinates {
                latitude: entry.latitude,
                longitude: entry.longitude,
            });
        }

        // Fall back to a partial city match ("scarborough, toronto" style
        // inputs, or truncated autocomplete values).
        CANADIAN_LOCATIONS
            .iter()
            .find(|entry| {
                let entry_city = entry.city.to_lowercase();
                (entry_city.contains(&city) || city.contains(&entry_city))
                    && region
                        .as_deref()
                        .map(|r| regions::canonical(entry.region) == *r)
                        .unwrap_or(true)
            })
            .map(|entry| Coordinates {
                latitude: entry.latitude,
                longitude: entry.longitude,
            })
    }
}

/// Split "city, region" into a lowercase city and optional canonical region.
fn split_location(location: &str) -> (String, Option<String>) {
    match location.split_once(',') {
        Some((city, region)) => {
            let region = region.trim();
            let region = if region.is_empty() {
                None
            } else {
                Some(regions::canonical(region))
            };
            (city.trim().to_lowercase(), region)
        }
        None => (location.trim().to_lowercase(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_city_alone() {
        let coords = StaticGeocoder.resolve("Toronto").unwrap();
        assert_eq!(coords.latitude, 43.65);
        assert_eq!(coords.longitude, -79.38);
    }

    #[test]
    fn test_resolve_city_with_abbreviated_region() {
        let coords = StaticGeocoder.resolve("toronto, on").unwrap();
        assert_eq!(coords.latitude, 43.65);
    }

    #[test]
    fn test_resolve_city_with_full_region() {
        assert!(StaticGeocoder.resolve("Peterborough, Ontario").is_some());
    }

    #[test]
    fn test_region_mismatch_rejected() {
        // Toronto is not in British Columbia
        assert!(StaticGeocoder.resolve("Toronto, BC").is_none());
    }

    #[test]
    fn test_unknown_city() {
        assert!(StaticGeocoder.resolve("Gotham City").is_none());
        assert!(StaticGeocoder.resolve("").is_none());
    }
}
