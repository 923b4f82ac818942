//! Stable sorting and offset pagination for filtered rows.

use crate::domains::listings::filters::{SortBy, SortOrder};
use crate::domains::listings::models::Listing;

/// Order rows by the requested key. `slice::sort_by` is stable, so rows with
/// equal keys keep their pre-sort relative order in either direction.
pub(super) fn sort(rows: &mut [Listing], by: SortBy, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = match by {
            SortBy::Price => a.price.cmp(&b.price),
            SortBy::Year => a.year.cmp(&b.year),
            SortBy::Mileage => a.mileage.cmp(&b.mileage),
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Slice out the requested page. With an offset the result is
/// `[offset, offset + limit)`; with only a limit, the first `limit` rows;
/// with neither, the rows pass through untouched.
pub(super) fn paginate(rows: Vec<Listing>, limit: Option<i64>, offset: Option<i64>) -> Vec<Listing> {
    if limit.is_none() && offset.is_none() {
        return rows;
    }
    let start = offset.unwrap_or(0).max(0) as usize;
    let count = match limit {
        Some(limit) if limit >= 0 => limit as usize,
        _ => usize::MAX,
    };
    rows.into_iter().skip(start).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::search::test_support::{listing_in, priced};
    use rust_decimal::Decimal;

    #[test]
    fn test_sort_by_price_both_directions() {
        let mut rows = vec![priced(30_000), priced(10_000), priced(20_000)];
        sort(&mut rows, SortBy::Price, SortOrder::Asc);
        let prices: Vec<Decimal> = rows.iter().map(|l| l.price).collect();
        assert_eq!(
            prices,
            vec![Decimal::from(10_000), Decimal::from(20_000), Decimal::from(30_000)]
        );

        sort(&mut rows, SortBy::Price, SortOrder::Desc);
        assert_eq!(rows[0].price, Decimal::from(30_000));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut a = priced(15_000);
        a.title = "first".to_string();
        let mut b = priced(15_000);
        b.title = "second".to_string();
        let mut c = priced(15_000);
        c.title = "third".to_string();

        let mut rows = vec![a, b, c];
        sort(&mut rows, SortBy::Price, SortOrder::Desc);
        let titles: Vec<&str> = rows.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_paginate_slices() {
        let rows: Vec<_> = (0..5)
            .map(|i| {
                let mut l = listing_in(None, None);
                l.mileage = i;
                l
            })
            .collect();

        let page = paginate(rows.clone(), Some(2), Some(1));
        let kept: Vec<i32> = page.iter().map(|l| l.mileage).collect();
        assert_eq!(kept, vec![1, 2]);

        // Limit without offset takes the head
        assert_eq!(paginate(rows.clone(), Some(3), None).len(), 3);

        // Offset without limit runs to the end
        assert_eq!(paginate(rows.clone(), None, Some(3)).len(), 2);

        // Offset past the end yields an empty page
        assert!(paginate(rows.clone(), Some(10), Some(99)).is_empty());

        // No pagination parameters is a pass-through
        assert_eq!(paginate(rows, None, None).len(), 5);
    }
}
