//! Navigational page series with gap markers
//!
//! A series is the list of entries a pagination control shows, for example
//! `1 … 7 8 [9] 10 11 … 36`. Two window shapes are supported:
//!
//! - [`WindowSpec::Outer`] keeps a few pages at both ends plus a few around
//!   the current page, collapsing each hidden run of two or more pages into a
//!   single gap. Only the visible pages are materialized, so the cost does not
//!   grow with the number of pages.
//! - [`WindowSpec::Centered`] is a plain contiguous run of pages that follows
//!   the current page and sticks to either end when it gets close.

mod window;

pub use window::WindowSpec;

use crate::error::VariableError;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// One entry of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesItem {
    /// A page linked from the control
    Page(u64),
    /// The page being displayed
    Current(u64),
    /// An elided run of at least two pages
    Gap,
}

impl SeriesItem {
    /// Page number for page entries, `None` for gaps
    pub fn number(&self) -> Option<u64> {
        match self {
            SeriesItem::Page(n) | SeriesItem::Current(n) => Some(*n),
            SeriesItem::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, SeriesItem::Gap)
    }

    pub fn is_current(&self) -> bool {
        matches!(self, SeriesItem::Current(_))
    }
}

/// Pages are numbers, the current page is a string, a gap is `"gap"`
impl Serialize for SeriesItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeriesItem::Page(n) => serializer.serialize_u64(*n),
            SeriesItem::Current(n) => serializer.collect_str(n),
            SeriesItem::Gap => serializer.serialize_str("gap"),
        }
    }
}

impl fmt::Display for SeriesItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesItem::Page(n) => write!(f, "{n}"),
            SeriesItem::Current(n) => write!(f, "[{n}]"),
            SeriesItem::Gap => f.write_str("…"),
        }
    }
}

/// Ordered entries of a pagination control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Series {
    items: SmallVec<[SeriesItem; 16]>,
}

impl Series {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[SeriesItem] {
        &self.items
    }

    /// The current page, if the series shows one
    pub fn current(&self) -> Option<u64> {
        self.items.iter().find_map(|item| match item {
            SeriesItem::Current(n) => Some(*n),
            _ => None,
        })
    }

    /// All page numbers in order, current included, gaps skipped
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().filter_map(SeriesItem::number)
    }

    /// Number of gap markers
    pub fn gap_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_gap()).count()
    }

    /// Push the pages in `[start, end)`, marking `current`.
    ///
    /// Bounds are signed and wider than `u64` so `end` can sit past
    /// `u64::MAX`; only values inside `1..=u64::MAX` are pushed.
    fn push_pages(&mut self, start: i128, end: i128, current: u64) {
        for n in start.max(1)..end {
            let Ok(n) = u64::try_from(n) else { break };
            self.items.push(if n == current {
                SeriesItem::Current(n)
            } else {
                SeriesItem::Page(n)
            });
        }
    }

    fn push_gap(&mut self) {
        self.items.push(SeriesItem::Gap);
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesItem;
    type IntoIter = std::slice::Iter<'a, SeriesItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<SeriesItem> for Series {
    fn from_iter<I: IntoIterator<Item = SeriesItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Series {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Build the series for `page` out of `last` pages
pub fn build_series(page: u64, last: u64, spec: &WindowSpec) -> Result<Series, VariableError> {
    spec.validate()?;
    if last == 0 {
        return Err(VariableError::new("last", ">= 1", last));
    }
    if page == 0 || page > last {
        return Err(VariableError::new("page", format!("in 1..{last}"), page));
    }

    let series = match *spec {
        WindowSpec::Empty => Series::new(),
        WindowSpec::Centered(size) => centered_series(page, last, size),
        WindowSpec::Outer(outer) => outer_series(page, last, outer),
    };
    tracing::debug!(page, last, len = series.len(), gaps = series.gap_count(), "built series");
    Ok(series)
}

fn centered_series(page: u64, last: u64, size: u64) -> Series {
    let size = size.min(last);
    let left = (size - 1) / 2;
    let start = if page <= left {
        1
    } else if page > last - (size - left) {
        last - size + 1
    } else {
        page - left
    };

    let start = i128::from(start);
    let mut series = Series::new();
    series.push_pages(start, start + i128::from(size), page);
    series
}

fn outer_series(page: u64, last: u64, [a, b, c, d]: [u64; 4]) -> Series {
    // Signed: the inner bounds may fall outside 1..=last before clamping.
    let (page_i, last_i) = (i128::from(page), i128::from(last));
    let left_start = 1 + i128::from(a);
    let mut left_end = page_i - i128::from(b) - 1;
    let mut right_start = page_i + i128::from(c) + 1;
    let right_end = last_i - i128::from(d);

    if left_end > right_end {
        left_end = right_end;
    }
    if left_start > right_start {
        right_start = left_start;
    }

    let mut series = Series::new();
    let mut start = 1;
    // `> 0` and not `>= 0`: a single hidden page is shown instead of a gap
    if left_end - left_start > 0 {
        series.push_pages(start, left_start, page);
        series.push_gap();
        start = left_end + 1;
    }
    if right_end - right_start > 0 {
        series.push_pages(start, right_start, page);
        series.push_gap();
        start = right_end + 1;
    }
    series.push_pages(start, last_i + 1, page);
    series
}
