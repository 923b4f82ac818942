//! Location-string matching: city, region, postal code, and combined forms.
//!
//! Deliberately forgiving. "toronto" matches "Toronto", "ON" matches
//! "Ontario", and small typos like "peterbrough" still find Peterborough.
//! Superseded entirely by distance filtering when a radius is given.

use crate::domains::catalog::regions;
use crate::domains::listings::models::Listing;

/// Tunable thresholds for fuzzy city comparison.
///
/// The defaults were picked by hand against common misspellings of Canadian
/// city names; they are not a formal edit distance. Tests assert behavior at
/// the defaults, not the exact threshold boundaries.
#[derive(Debug, Clone, Copy)]
pub struct CityMatchParams {
    /// Minimum normalized length before prefix and fuzzy rules apply.
    pub min_len: usize,
    /// Leading characters compared before falling back to the ratio test.
    pub prefix_window: usize,
    /// Per-position match ratio that always counts as a match.
    pub similarity: f64,
    /// Looser ratio accepted when the lengths differ by exactly one.
    pub lenient_similarity: f64,
    /// Largest length difference still eligible for fuzzy comparison.
    pub max_len_diff: usize,
}

impl Default for CityMatchParams {
    fn default() -> Self {
        CityMatchParams {
            min_len: 6,
            prefix_window: 8,
            similarity: 0.85,
            lenient_similarity: 0.75,
            max_len_diff: 2,
        }
    }
}

/// Keep rows matching the location query ("city" or "city, region").
pub(super) fn filter(rows: Vec<Listing>, query: &str) -> Vec<Listing> {
    let params = CityMatchParams::default();
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|listing| matches_location(listing, &query, &params))
        .collect()
}

/// Verdict for one row: the OR of the city, region, postal, combined, and
/// city-only rules.
fn matches_location(listing: &Listing, query: &str, params: &CityMatchParams) -> bool {
    let city = lower_or_empty(listing.location_city.as_deref());
    let region = lower_or_empty(listing.location_region.as_deref());
    let postal = lower_or_empty(listing.postal_code.as_deref());

    let (query_city, query_region) = split_query(query);

    let city_ok = city_matches(&city, query_city, params);
    let region_ok = !query_region.is_empty() && region_matches(&region, query_region);
    let postal_ok =
        !postal.is_empty() && (postal.contains(query) || query.contains(postal.as_str()));
    let combined_ok = !query_city.is_empty()
        && !query_region.is_empty()
        && combined_matches(&city, &region, query_city, query_region, city_ok);
    let city_only_ok = query_region.is_empty() && city_ok;

    city_ok || region_ok || postal_ok || combined_ok || city_only_ok
}

fn lower_or_empty(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Split "city, region" on the first comma; no comma means city only.
fn split_query(query: &str) -> (&str, &str) {
    match query.split_once(',') {
        Some((city, region)) => (city.trim(), region.trim()),
        None => (query.trim(), ""),
    }
}

/// City comparison: exact (whitespace-stripped), shared prefix window, or
/// fuzzy positional similarity.
fn city_matches(city: &str, query_city: &str, params: &CityMatchParams) -> bool {
    let a = strip_whitespace(city);
    let b = strip_whitespace(query_city);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() < params.min_len || b_chars.len() < params.min_len {
        return false;
    }

    // Substring containment of the other name's leading window.
    let a_prefix: String = a_chars.iter().take(params.min_len).collect();
    let b_prefix: String = b_chars.iter().take(params.min_len).collect();
    if a.contains(&b_prefix) || b.contains(&a_prefix) {
        return true;
    }

    fuzzy_city_match(&a_chars, &b_chars, params)
}

/// Typo tolerance: names of near-equal length whose leading characters agree,
/// or whose per-position character overlap is high enough.
fn fuzzy_city_match(a: &[char], b: &[char], params: &CityMatchParams) -> bool {
    let short = a.len().min(b.len());
    let long = a.len().max(b.len());
    let len_diff = long - short;
    if len_diff > params.max_len_diff {
        return false;
    }

    let window = params.prefix_window.min(short);
    if a[..window] == b[..window] {
        return true;
    }

    let matching = (0..short).filter(|&i| a[i] == b[i]).count();
    let similarity = matching as f64 / long as f64;
    similarity >= params.similarity
        || (similarity >= params.lenient_similarity && len_diff <= 1)
}

/// Region comparison: equality or containment either way, then the
/// abbreviation table in both directions.
fn region_matches(region: &str, query_region: &str) -> bool {
    if region.is_empty() {
        return false;
    }
    if region == query_region
        || region.contains(query_region)
        || query_region.contains(region)
    {
        return true;
    }
    if let Some(full) = regions::expand_abbreviation(query_region) {
        if region == full {
            return true;
        }
    }
    if let Some(full) = regions::expand_abbreviation(region) {
        if query_region == full {
            return true;
        }
    }
    false
}

/// "city, region" comparison in original and canonical-region forms, plus
/// the fallback of a city match with regions agreeing canonically.
fn combined_matches(
    city: &str,
    region: &str,
    query_city: &str,
    query_region: &str,
    city_ok: bool,
) -> bool {
    if city.is_empty() || region.is_empty() {
        return false;
    }

    let listing_combined = format!("{city}, {region}");
    let query_combined = format!("{query_city}, {query_region}");
    if listing_combined.contains(&query_combined) || query_combined.contains(&listing_combined) {
        return true;
    }

    let listing_canonical = format!("{city}, {}", regions::canonical(region));
    let query_canonical = format!("{query_city}, {}", regions::canonical(query_region));
    if listing_canonical.contains(&query_canonical)
        || query_canonical.contains(&listing_canonical)
    {
        return true;
    }

    city_ok && regions::canonical(region) == regions::canonical(query_region)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
