//! Property-based tests for the page model and series builder.
//!
//! Uses proptest to check the structural guarantees of every series and the
//! page arithmetic over wide input ranges.

use page_series::model::standard_pages;
use page_series::{build_series, Page, PageVars, Series, SeriesItem, WindowSpec};
use proptest::prelude::*;

fn page_and_last() -> impl Strategy<Value = (u64, u64)> {
    (1u64..5_000).prop_flat_map(|last| (1..=last, Just(last)))
}

/// Checks every page in `1..=last` is either listed or hidden in a gap of 2+
fn assert_covers(series: &Series, last: u64) -> Result<(), TestCaseError> {
    let items = series.as_slice();
    let mut prev_number = 0u64;
    let mut after_gap = false;
    for item in items {
        match item.number() {
            Some(n) => {
                if after_gap {
                    prop_assert!(n - prev_number - 1 >= 2, "gap hides fewer than 2 pages before {}", n);
                } else {
                    prop_assert_eq!(n, prev_number + 1, "pages not contiguous at {}", n);
                }
                prev_number = n;
                after_gap = false;
            }
            None => {
                prop_assert!(!after_gap, "consecutive gaps");
                after_gap = true;
            }
        }
    }
    if after_gap {
        prop_assert!(last - prev_number >= 2, "trailing gap hides fewer than 2 pages");
    } else {
        prop_assert_eq!(prev_number, last);
    }
    Ok(())
}

// =============================================================================
// Page Arithmetic Properties
// =============================================================================

proptest! {
    /// last = max(ceil(count / items), 1)
    #[test]
    fn prop_last_formula(count in 0u64..10_000_000, items in 1u64..1_000) {
        let page = Page::new(&PageVars::new(count).with_items(items)).unwrap();
        let expected = ((count + items - 1) / items).max(1);
        prop_assert_eq!(page.last(), expected);
        prop_assert!(page.last() >= 1);
    }

    /// prev is absent only on the first page, next only on the last page
    #[test]
    fn prop_prev_next(count in 0u64..100_000, items in 1u64..100, pick in any::<u64>(), cycle in any::<bool>()) {
        let last = standard_pages(count, items);
        let current = pick % last + 1;
        let vars = PageVars::new(count).with_items(items).with_page(current).with_cycle(cycle);
        let page = Page::new(&vars).unwrap();

        prop_assert_eq!(page.prev().is_none(), current == 1);
        prop_assert_eq!(page.next().is_none(), current == last && !cycle);
        prop_assert!(page.from() <= page.to());
        prop_assert!(page.in_page() <= items);
    }

    /// Requests past the last page always overflow
    #[test]
    fn prop_overflow(count in 0u64..100_000, items in 1u64..100, extra in 1u64..1_000) {
        let last = standard_pages(count, items);
        let err = Page::new(&PageVars::new(count).with_items(items).with_page(last + extra)).unwrap_err();
        prop_assert!(err.is_overflow());
        prop_assert_eq!(err.as_overflow().map(|e| e.range()), Some(1..=last));
    }
}

// =============================================================================
// Series Properties
// =============================================================================

proptest! {
    /// Outer windows: no adjacent gaps, gaps hide 2+ pages, nothing missing
    #[test]
    fn prop_outer_structure((page, last) in page_and_last(), spec in prop::array::uniform4(0u64..12)) {
        let series = build_series(page, last, &WindowSpec::Outer(spec)).unwrap();
        assert_covers(&series, last)?;
        prop_assert!(series.gap_count() <= 2);
    }

    /// Exactly one entry is the current page
    #[test]
    fn prop_single_current((page, last) in page_and_last(), spec in prop::array::uniform4(0u64..12), size in 1u64..40) {
        for window in [WindowSpec::Outer(spec), WindowSpec::Centered(size)] {
            let series = build_series(page, last, &window).unwrap();
            let currents: Vec<_> = series.iter().filter(|item| item.is_current()).collect();
            let expected = SeriesItem::Current(page);
            prop_assert_eq!(currents, vec![&expected]);
        }
    }

    /// Centered windows are contiguous, min(size, last) long and contain the page
    #[test]
    fn prop_centered_contiguous((page, last) in page_and_last(), size in 1u64..40) {
        let series = build_series(page, last, &WindowSpec::Centered(size)).unwrap();
        let pages: Vec<u64> = series.pages().collect();
        prop_assert_eq!(series.gap_count(), 0);
        prop_assert_eq!(pages.len() as u64, size.min(last));
        prop_assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(pages.contains(&page));
        prop_assert!(pages[0] >= 1 && *pages.last().unwrap() <= last);
    }

    /// Building twice gives the same series
    #[test]
    fn prop_idempotent((page, last) in page_and_last(), spec in prop::array::uniform4(0u64..12)) {
        let window = WindowSpec::Outer(spec);
        prop_assert_eq!(build_series(page, last, &window).unwrap(), build_series(page, last, &window).unwrap());
    }

    /// Outer series length depends on the window, not on the page count
    #[test]
    fn prop_outer_bounded(page_pick in any::<u64>(), last in 1u64..u64::MAX / 2, spec in prop::array::uniform4(0u64..8)) {
        let page = page_pick % last + 1;
        let series = build_series(page, last, &WindowSpec::Outer(spec)).unwrap();
        let bound: u64 = spec.iter().sum::<u64>() + 1 + 2 + 2;
        prop_assert!(series.len() as u64 <= bound);
    }
}
