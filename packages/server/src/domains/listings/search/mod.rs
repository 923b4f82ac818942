//! In-memory listing search pipeline.
//!
//! The row source applies the coarse SQL predicates (make, model, colour,
//! price and year bounds, active status); this module applies the stages
//! that need application logic, in a fixed order:
//!
//! 1. free-text search,
//! 2. location-string filtering OR distance filtering (a distance radius
//!    supersedes the location-string rules entirely),
//! 3. sorting,
//! 4. offset pagination.
//!
//! The pipeline is pure: it never mutates its input rows, holds no state
//! between calls, and the same `(rows, filters)` always produces the same
//! output.

mod distance;
mod location;
mod sort;
mod text;

pub use distance::haversine_km;
pub use location::CityMatchParams;

use crate::domains::listings::filters::{ListingFilters, SortOrder};
use crate::domains::listings::models::Listing;
use crate::kernel::geocoder::Geocoder;

/// Run every in-memory stage over `rows`, producing the page the user sees.
pub fn apply(rows: Vec<Listing>, filters: &ListingFilters, geocoder: &dyn Geocoder) -> Vec<Listing> {
    let fetched = rows.len();
    let mut rows = rows;

    if let Some(query) = filters.search.as_deref() {
        rows = text::filter(rows, query);
    }

    if let Some(location) = filters.location.as_deref() {
        match filters.distance_radius() {
            Some(radius) => rows = distance::filter(rows, location, radius, geocoder),
            None => rows = location::filter(rows, location),
        }
    }

    if let Some(sort_by) = filters.sort_by {
        let order = filters.sort_order.unwrap_or(SortOrder::Desc);
        sort::sort(&mut rows, sort_by, order);
    }

    let rows = sort::paginate(rows, filters.limit, filters.offset);
    tracing::debug!(fetched, returned = rows.len(), "listing search pipeline finished");
    rows
}
