//! Canadian cities for location autocomplete and geocoding.
//!
//! One static table serves both the search-form autocomplete and the
//! coordinate lookup behind distance filtering. Coordinates are city-centre
//! approximations, which is plenty for radius search between cities.

use lazy_static::lazy_static;
use regex::Regex;

use super::regions;

/// A known Canadian city with its province and approximate coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LocationEntry {
    pub city: &'static str,
    pub region: &'static str,
    /// First letter of the city's postal codes.
    pub postal_prefix: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationEntry {
    /// Display label, e.g. "Toronto, ON".
    pub fn label(&self) -> String {
        match regions::abbreviate(self.region) {
            Some(abbr) => format!("{}, {}", self.city, abbr.to_uppercase()),
            None => format!("{}, {}", self.city, self.region),
        }
    }
}

pub const CANADIAN_LOCATIONS: &[LocationEntry] = &[
    // Ontario
    LocationEntry { city: "Toronto", region: "Ontario", postal_prefix: "M", latitude: 43.65, longitude: -79.38 },
    LocationEntry { city: "Ottawa", region: "Ontario", postal_prefix: "K", latitude: 45.42, longitude: -75.70 },
    LocationEntry { city: "Mississauga", region: "Ontario", postal_prefix: "L", latitude: 43.59, longitude: -79.64 },
    LocationEntry { city: "Brampton", region: "Ontario", postal_prefix: "L", latitude: 43.73, longitude: -79.76 },
    LocationEntry { city: "Hamilton", region: "Ontario", postal_prefix: "L", latitude: 43.26, longitude: -79.87 },
    LocationEntry { city: "London", region: "Ontario", postal_prefix: "N", latitude: 42.98, longitude: -81.25 },
    LocationEntry { city: "Markham", region: "Ontario", postal_prefix: "L", latitude: 43.87, longitude: -79.26 },
    LocationEntry { city: "Vaughan", region: "Ontario", postal_prefix: "L", latitude: 43.84, longitude: -79.50 },
    LocationEntry { city: "Kitchener", region: "Ontario", postal_prefix: "N", latitude: 43.45, longitude: -80.49 },
    LocationEntry { city: "Windsor", region: "Ontario", postal_prefix: "N", latitude: 42.30, longitude: -83.02 },
    LocationEntry { city: "Richmond Hill", region: "Ontario", postal_prefix: "L", latitude: 43.88, longitude: -79.44 },
    LocationEntry { city: "Oakville", region: "Ontario", postal_prefix: "L", latitude: 43.47, longitude: -79.69 },
    LocationEntry { city: "Burlington", region: "Ontario", postal_prefix: "L", latitude: 43.33, longitude: -79.80 },
    LocationEntry { city: "Oshawa", region: "Ontario", postal_prefix: "L", latitude: 43.90, longitude: -78.86 },
    LocationEntry { city: "St. Catharines", region: "Ontario", postal_prefix: "L", latitude: 43.16, longitude: -79.25 },
    LocationEntry { city: "Cambridge", region: "Ontario", postal_prefix: "N", latitude: 43.36, longitude: -80.31 },
    LocationEntry { city: "Guelph", region: "Ontario", postal_prefix: "N", latitude: 43.54, longitude: -80.25 },
    LocationEntry { city: "Barrie", region: "Ontario", postal_prefix: "L", latitude: 44.39, longitude: -79.69 },
    LocationEntry { city: "Kingston", region: "Ontario", postal_prefix: "K", latitude: 44.23, longitude: -76.48 },
    LocationEntry { city: "Peterborough", region: "Ontario", postal_prefix: "K", latitude: 44.30, longitude: -78.32 },
    LocationEntry { city: "Thunder Bay", region: "Ontario", postal_prefix: "P", latitude: 48.38, longitude: -89.25 },
    // Quebec
    LocationEntry { city: "Montreal", region: "Quebec", postal_prefix: "H", latitude: 45.50, longitude: -73.57 },
    LocationEntry { city: "Quebec City", region: "Quebec", postal_prefix: "G", latitude: 46.81, longitude: -71.21 },
    LocationEntry { city: "Laval", region: "Quebec", postal_prefix: "H", latitude: 45.61, longitude: -73.71 },
    LocationEntry { city: "Gatineau", region: "Quebec", postal_prefix: "J", latitude: 45.48, longitude: -75.70 },
    LocationEntry { city: "Longueuil", region: "Quebec", postal_prefix: "J", latitude: 45.53, longitude: -73.52 },
    LocationEntry { city: "Sherbrooke", region: "Quebec", postal_prefix: "J", latitude: 45.40, longitude: -71.89 },
    LocationEntry { city: "Saguenay", region: "Quebec", postal_prefix: "G", latitude: 48.43, longitude: -71.07 },
    LocationEntry { city: "Trois-Rivières", region: "Quebec", postal_prefix: "G", latitude: 46.35, longitude: -72.55 },
    // British Columbia
    LocationEntry { city: "Vancouver", region: "British Columbia", postal_prefix: "V", latitude: 49.28, longitude: -123.12 },
    LocationEntry { city: "Surrey", region: "British Columbia", postal_prefix: "V", latitude: 49.19, longitude: -122.85 },
    LocationEntry { city: "Burnaby", region: "British Columbia", postal_prefix: "V", latitude: 49.25, longitude: -122.98 },
    LocationEntry { city: "Richmond", region: "British Columbia", postal_prefix: "V", latitude: 49.17, longitude: -123.14 },
    LocationEntry { city: "Langley", region: "British Columbia", postal_prefix: "V", latitude: 49.10, longitude: -122.66 },
    LocationEntry { city: "Coquitlam", region: "British Columbia", postal_prefix: "V", latitude: 49.28, longitude: -122.79 },
    LocationEntry { city: "Abbotsford", region: "British Columbia", postal_prefix: "V", latitude: 49.05, longitude: -122.33 },
    LocationEntry { city: "Kelowna", region: "British Columbia", postal_prefix: "V", latitude: 49.89, longitude: -119.50 },
    LocationEntry { city: "Victoria", region: "British Columbia", postal_prefix: "V", latitude: 48.43, longitude: -123.37 },
    LocationEntry { city: "Nanaimo", region: "British Columbia", postal_prefix: "V", latitude: 49.17, longitude: -123.94 },
    // Alberta
    LocationEntry { city: "Calgary", region: "Alberta", postal_prefix: "T", latitude: 51.05, longitude: -114.07 },
    LocationEntry { city: "Edmonton", region: "Alberta", postal_prefix: "T", latitude: 53.55, longitude: -113.49 },
    LocationEntry { city: "Red Deer", region: "Alberta", postal_prefix: "T", latitude: 52.27, longitude: -113.81 },
    LocationEntry { city: "Lethbridge", region: "Alberta", postal_prefix: "T", latitude: 49.69, longitude: -112.84 },
    LocationEntry { city: "St. Albert", region: "Alberta", postal_prefix: "T", latitude: 53.63, longitude: -113.63 },
    LocationEntry { city: "Medicine Hat", region: "Alberta", postal_prefix: "T", latitude: 50.04, longitude: -110.68 },
    LocationEntry { city: "Grande Prairie", region: "Alberta", postal_prefix: "T", latitude: 55.17, longitude: -118.80 },
    // Manitoba
    LocationEntry { city: "Winnipeg", region: "Manitoba", postal_prefix: "R", latitude: 49.90, longitude: -97.14 },
    LocationEntry { city: "Brandon", region: "Manitoba", postal_prefix: "R", latitude: 49.85, longitude: -99.95 },
    // Saskatchewan
    LocationEntry { city: "Saskatoon", region: "Saskatchewan", postal_prefix: "S", latitude: 52.13, longitude: -106.67 },
    LocationEntry { city: "Regina", region: "Saskatchewan", postal_prefix: "S", latitude: 50.45, longitude: -104.62 },
    LocationEntry { city: "Prince Albert", region: "Saskatchewan", postal_prefix: "S", latitude: 53.20, longitude: -105.75 },
    // Nova Scotia
    LocationEntry { city: "Halifax", region: "Nova Scotia", postal_prefix: "B", latitude: 44.65, longitude: -63.57 },
    LocationEntry { city: "Dartmouth", region: "Nova Scotia", postal_prefix: "B", latitude: 44.67, longitude: -63.58 },
    // New Brunswick
    LocationEntry { city: "Saint John", region: "New Brunswick", postal_prefix: "E", latitude: 45.27, longitude: -66.06 },
    LocationEntry { city: "Moncton", region: "New Brunswick", postal_prefix: "E", latitude: 46.09, longitude: -64.77 },
    LocationEntry { city: "Fredericton", region: "New Brunswick", postal_prefix: "E", latitude: 45.96, longitude: -66.64 },
    // Newfoundland and Labrador
    LocationEntry { city: "St. John's", region: "Newfoundland and Labrador", postal_prefix: "A", latitude: 47.56, longitude: -52.71 },
    // Prince Edward Island
    LocationEntry { city: "Charlottetown", region: "Prince Edward Island", postal_prefix: "C", latitude: 46.24, longitude: -63.13 },
    // Northwest Territories
    LocationEntry { city: "Yellowknife", region: "Northwest Territories", postal_prefix: "X", latitude: 62.45, longitude: -114.37 },
    // Yukon
    LocationEntry { city: "Whitehorse", region: "Yukon", postal_prefix: "Y", latitude: 60.72, longitude: -135.05 },
    // Nunavut
    LocationEntry { city: "Iqaluit", region: "Nunavut", postal_prefix: "X", latitude: 63.75, longitude: -68.52 },
];

lazy_static! {
    /// Full Canadian postal code, e.g. "M5H 2N2" or "m5h2n2".
    static ref POSTAL_CODE: Regex = Regex::new(r"(?i)^[a-z]\d[a-z]\s*\d[a-z]\d$").unwrap();
}

/// Filter the catalog for autocomplete: by city, region, label, or postal
/// prefix. A full postal code narrows to cities sharing its first letter.
pub fn filter_locations(query: &str) -> Vec<&'static LocationEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return CANADIAN_LOCATIONS.iter().collect();
    }

    if POSTAL_CODE.is_match(&query) {
        let first = &query[..1];
        return CANADIAN_LOCATIONS
            .iter()
            .filter(|entry| entry.postal_prefix.to_lowercase() == first)
            .collect();
    }

    CANADIAN_LOCATIONS
        .iter()
        .filter(|entry| {
            entry.city.to_lowercase().contains(&query)
                || entry.region.to_lowercase().contains(&query)
                || entry.label().to_lowercase().contains(&query)
                || entry.postal_prefix.to_lowercase() == query
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_city_fragment() {
        let hits = filter_locations("toro");
        assert!(hits.iter().any(|e| e.city == "Toronto"));
    }

    #[test]
    fn test_filter_by_region() {
        let hits = filter_locations("british columbia");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|e| e.region == "British Columbia"));
    }

    #[test]
    fn test_filter_by_full_postal_code() {
        // Toronto postal codes start with M
        let hits = filter_locations("M5H 2N2");
        assert!(hits.iter().any(|e| e.city == "Toronto"));
        assert!(hits.iter().all(|e| e.postal_prefix == "M"));

        // Also without the space
        let hits = filter_locations("m5h2n2");
        assert!(hits.iter().any(|e| e.city == "Toronto"));
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_locations("").len(), CANADIAN_LOCATIONS.len());
    }

    #[test]
    fn test_label_uses_abbreviation() {
        let toronto = CANADIAN_LOCATIONS
            .iter()
            .find(|e| e.city == "Toronto")
            .unwrap();
        assert_eq!(toronto.label(), "Toronto, ON");
    }
}
