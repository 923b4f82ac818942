//! Great-circle distance filtering around a query location.

use crate::domains::catalog::regions;
use crate::domains::listings::models::Listing;
use crate::kernel::geocoder::{Coordinates, Geocoder};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Keep rows within `radius_km` of the query location. If the query location
/// itself cannot be resolved, the filter degrades to a no-op; rows whose own
/// position cannot be determined are excluded.
pub(super) fn filter(
    rows: Vec<Listing>,
    location: &str,
    radius_km: f64,
    geocoder: &dyn Geocoder,
) -> Vec<Listing> {
    let origin = match geocoder.resolve(location) {
        Some(coords) => coords,
        None => {
            tracing::warn!(location, "search location did not resolve; skipping distance filter");
            return rows;
        }
    };
    rows.into_iter()
        .filter(|listing| within_radius(listing, origin, radius_km, geocoder))
        .collect()
}

fn within_radius(
    listing: &Listing,
    origin: Coordinates,
    radius_km: f64,
    geocoder: &dyn Geocoder,
) -> bool {
    // Stored coordinates win over any lookup
    if let (Some(latitude), Some(longitude)) = (listing.latitude, listing.longitude) {
        let position = Coordinates { latitude, longitude };
        return haversine_km(origin, position) <= radius_km;
    }

    let city = listing
        .location_city
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .unwrap_or_default();
    if city.is_empty() {
        return false;
    }
    let region = listing
        .location_region
        .as_deref()
        .map(|r| r.trim().to_lowercase())
        .unwrap_or_default();

    for candidate in lookup_candidates(&city, &region) {
        if let Some(position) = geocoder.resolve(&candidate) {
            return haversine_km(origin, position) <= radius_km;
        }
    }
    false
}

/// Candidate lookup strings for a row's position, most to least specific:
/// full region name, two-letter region, region as stored, then the bare
/// city. First successful resolution wins.
fn lookup_candidates(city: &str, region: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    if !region.is_empty() {
        let canonical = regions::canonical(region);
        let mut forms = vec![canonical.clone()];
        if let Some(abbr) = regions::abbreviate(&canonical) {
            forms.push(abbr.to_string());
        }
        forms.push(region.to_string());
        for form in forms {
            let candidate = format!("{city}, {form}");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }
    candidates.push(city.to_string());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::search::test_support::listing_in;
    use crate::kernel::geocoder::StaticGeocoder;

    const TORONTO: Coordinates = Coordinates {
        latitude: 43.65,
        longitude: -79.38,
    };

    #[test]
    fn test_haversine_known_distance() {
        // Downtown Toronto to a point a few km northwest
        let nearby = Coordinates {
            latitude: 43.70,
            longitude: -79.40,
        };
        let d = haversine_km(TORONTO, nearby);
        assert!((d - 5.7).abs() < 0.3, "got {d} km");

        // Zero distance to itself
        assert!(haversine_km(TORONTO, TORONTO) < 1e-9);
    }

    #[test]
    fn test_stored_coordinates_checked_against_radius() {
        let mut row = listing_in(Some("Toronto"), Some("Ontario"));
        row.latitude = Some(43.70);
        row.longitude = Some(-79.40);

        let kept = filter(vec![row.clone()], "Toronto", 10.0, &StaticGeocoder);
        assert_eq!(kept.len(), 1);

        let kept = filter(vec![row], "Toronto", 1.0, &StaticGeocoder);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_city_lookup_fallback() {
        // No stored coordinates; position comes from the city table
        let rows = vec![
            listing_in(Some("Mississauga"), Some("ON")),
            listing_in(Some("Vancouver"), Some("BC")),
        ];
        let kept = filter(rows, "Toronto", 50.0, &StaticGeocoder);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].location_city.as_deref(), Some("Mississauga"));
    }

    #[test]
    fn test_row_without_position_is_excluded() {
        let rows = vec![listing_in(None, Some("Ontario"))];
        assert!(filter(rows, "Toronto", 100.0, &StaticGeocoder).is_empty());
    }

    #[test]
    fn test_unresolvable_query_location_is_a_no_op() {
        let rows = vec![listing_in(Some("Toronto"), Some("Ontario"))];
        let kept = filter(rows, "Atlantis", 10.0, &StaticGeocoder);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_lookup_candidates_order() {
        let candidates = lookup_candidates("barrie", "on");
        assert_eq!(
            candidates,
            vec!["barrie, ontario", "barrie, on", "barrie"]
        );

        let candidates = lookup_candidates("barrie", "ontario");
        assert_eq!(
            candidates,
            vec!["barrie, ontario", "barrie, on", "barrie"]
        );

        let candidates = lookup_candidates("barrie", "");
        assert_eq!(candidates, vec!["barrie"]);
    }
}
