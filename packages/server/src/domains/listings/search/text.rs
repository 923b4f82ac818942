//! Free-text search over listing content fields.

use crate::domains::listings::models::Listing;

/// Keep rows whose searchable text contains the query as a substring.
/// Case-insensitive; the query is trimmed but not tokenized or ranked.
pub(super) fn filter(rows: Vec<Listing>, query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|listing| searchable_text(listing).contains(&needle))
        .collect()
}

/// Lowercase concatenation of the fields a buyer might type against.
fn searchable_text(listing: &Listing) -> String {
    let mut parts: Vec<&str> = vec![
        &listing.title,
        &listing.description,
        &listing.make,
        &listing.model,
    ];
    if let Some(city) = listing.location_city.as_deref() {
        parts.push(city);
    }
    if let Some(region) = listing.location_region.as_deref() {
        parts.push(region);
    }
    parts.join(" ").to_lowercase()
}
