//! End-to-end tests for the in-memory listing search pipeline.
//!
//! Everything here runs against plain values; the pipeline is pure, so no
//! database is involved.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use server_core::common::{ListingId, UserId};
use server_core::domains::listings::search;
use server_core::domains::listings::{Listing, ListingFilters, SortBy, SortOrder};
use server_core::kernel::StaticGeocoder;

/// A valid listing with sensible defaults; tests override what they need.
fn listing(n: u32) -> Listing {
    Listing {
        id: ListingId::new(),
        user_id: UserId::new(),
        title: format!("2018 Honda Civic LX #{n}"),
        description: "Well maintained, no accidents, two sets of tires.".to_string(),
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        year: 2018,
        mileage: 80_000,
        transmission: "automatic".to_string(),
        fuel_type: "gasoline".to_string(),
        condition: "used".to_string(),
        colour: Some("Blue".to_string()),
        price: Decimal::from(17_000),
        currency: "CAD".to_string(),
        location_city: Some("Toronto".to_string()),
        location_region: Some("Ontario".to_string()),
        location_country: Some("Canada".to_string()),
        postal_code: None,
        latitude: None,
        longitude: None,
        is_active: true,
        view_count: 0,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::hours(n as i64),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

fn in_city(n: u32, city: &str, region: &str) -> Listing {
    Listing {
        location_city: Some(city.to_string()),
        location_region: Some(region.to_string()),
        ..listing(n)
    }
}

#[test]
fn empty_filters_return_rows_unchanged() {
    let rows: Vec<Listing> = (0..4).map(listing).collect();
    let expected: Vec<ListingId> = rows.iter().map(|l| l.id).collect();

    let out = search::apply(rows, &ListingFilters::default(), &StaticGeocoder);
    let got: Vec<ListingId> = out.iter().map(|l| l.id).collect();
    assert_eq!(got, expected);
}

#[test]
fn pipeline_is_idempotent() {
    let rows = vec![
        in_city(0, "Toronto", "Ontario"),
        in_city(1, "Peterborough", "Ontario"),
        in_city(2, "Vancouver", "British Columbia"),
    ];
    let filters = ListingFilters {
        search: Some("civic".to_string()),
        location: Some("toronto, on".to_string()),
        sort_by: Some(SortBy::CreatedAt),
        limit: Some(2),
        ..Default::default()
    };

    let first = search::apply(rows.clone(), &filters, &StaticGeocoder);
    let second = search::apply(rows, &filters, &StaticGeocoder);
    let first_ids: Vec<ListingId> = first.iter().map(|l| l.id).collect();
    let second_ids: Vec<ListingId> = second.iter().map(|l| l.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn free_text_search_is_a_substring_test() {
    let mut diesel = listing(0);
    diesel.title = "2020 RAM 1500 EcoDiesel".to_string();
    diesel.make = "Ram".to_string();
    diesel.model = "1500".to_string();
    let rows = vec![diesel, listing(1)];

    let filters = ListingFilters {
        search: Some("  ecodiesel ".to_string()),
        ..Default::default()
    };
    let out = search::apply(rows, &filters, &StaticGeocoder);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].make, "Ram");
}

#[test]
fn typo_in_city_still_matches() {
    let rows = vec![
        in_city(0, "Peterborough", "Ontario"),
        in_city(1, "Vancouver", "British Columbia"),
    ];
    let filters = ListingFilters {
        location: Some("peterbrough".to_string()),
        ..Default::default()
    };

    let out = search::apply(rows, &filters, &StaticGeocoder);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].location_city.as_deref(), Some("Peterborough"));
}

#[test]
fn region_abbreviation_matches_full_name() {
    let rows = vec![
        in_city(0, "Hamilton", "Ontario"),
        in_city(1, "Halifax", "Nova Scotia"),
    ];
    let filters = ListingFilters {
        location: Some("hamilton, on".to_string()),
        ..Default::default()
    };

    let out = search::apply(rows, &filters, &StaticGeocoder);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].location_region.as_deref(), Some("Ontario"));
}

#[test]
fn distance_filter_uses_stored_coordinates() {
    let mut nearby = in_city(0, "Toronto", "Ontario");
    nearby.latitude = Some(43.70);
    nearby.longitude = Some(-79.40);

    let wide = ListingFilters {
        location: Some("Toronto".to_string()),
        distance: Some(10.0),
        ..Default::default()
    };
    let out = search::apply(vec![nearby.clone()], &wide, &StaticGeocoder);
    assert_eq!(out.len(), 1);

    // The same row is ~5.7 km out, so a 1 km radius drops it
    let tight = ListingFilters {
        location: Some("Toronto".to_string()),
        distance: Some(1.0),
        ..Default::default()
    };
    let out = search::apply(vec![nearby], &tight, &StaticGeocoder);
    assert!(out.is_empty());
}

#[test]
fn distance_supersedes_location_string_rules() {
    // Oshawa would pass the location-string filter for "toronto, on" via
    // the region rule; the distance filter must be the one that runs.
    let rows = vec![in_city(0, "Oshawa", "Ontario")];
    let filters = ListingFilters {
        location: Some("toronto, on".to_string()),
        distance: Some(5.0),
        ..Default::default()
    };
    assert!(search::apply(rows, &filters, &StaticGeocoder).is_empty());
}

#[test]
fn sort_orders_and_ties_are_stable() {
    let mut rows: Vec<Listing> = (0..4).map(listing).collect();
    rows[0].price = Decimal::from(22_000);
    rows[1].price = Decimal::from(18_000);
    rows[2].price = Decimal::from(18_000);
    rows[3].price = Decimal::from(25_000);
    let tie_first = rows[1].id;
    let tie_second = rows[2].id;

    let filters = ListingFilters {
        sort_by: Some(SortBy::Price),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    let out = search::apply(rows, &filters, &StaticGeocoder);

    let prices: Vec<Decimal> = out.iter().map(|l| l.price).collect();
    assert_eq!(
        prices,
        vec![
            Decimal::from(18_000),
            Decimal::from(18_000),
            Decimal::from(22_000),
            Decimal::from(25_000)
        ]
    );
    // Equal prices keep their input order
    assert_eq!(out[0].id, tie_first);
    assert_eq!(out[1].id, tie_second);
}

#[test]
fn pagination_matches_the_full_sorted_slice() {
    let rows: Vec<Listing> = (0..10).map(listing).collect();

    let sorted_filters = ListingFilters {
        sort_by: Some(SortBy::CreatedAt),
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    };
    let full = search::apply(rows.clone(), &sorted_filters, &StaticGeocoder);

    for (limit, offset) in [(3, 0), (3, 3), (4, 8), (5, 20)] {
        let paged_filters = ListingFilters {
            sort_by: Some(SortBy::CreatedAt),
            sort_order: Some(SortOrder::Desc),
            limit: Some(limit),
            offset: Some(offset),
            ..Default::default()
        };
        let page = search::apply(rows.clone(), &paged_filters, &StaticGeocoder);

        assert!(page.len() as i64 <= limit);
        let start = (offset as usize).min(full.len());
        let end = (start + limit as usize).min(full.len());
        let expected: Vec<ListingId> = full[start..end].iter().map(|l| l.id).collect();
        let got: Vec<ListingId> = page.iter().map(|l| l.id).collect();
        assert_eq!(got, expected, "limit {limit} offset {offset}");
    }
}

#[test]
fn unresolvable_search_location_skips_distance_filter() {
    let rows = vec![in_city(0, "Toronto", "Ontario")];
    let filters = ListingFilters {
        location: Some("Middle of Nowhere".to_string()),
        distance: Some(10.0),
        ..Default::default()
    };
    // Filter degrades to a no-op rather than dropping everything
    assert_eq!(search::apply(rows, &filters, &StaticGeocoder).len(), 1);
}
