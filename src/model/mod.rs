//! Page model: validated pagination inputs and derived arithmetic

mod metadata;
mod sizing;

pub use metadata::Metadata;
pub use sizing::{standard_pages, Capped, Sizing, Standard};

use crate::config::{OverflowMode, PageVars};
use crate::error::{OverflowError, PageError, VariableError};
use crate::series::{build_series, Series, WindowSpec};

/// One page of a paginated collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    vars: PageVars,
    count: u64,
    items: u64,
    page: u64,
    requested_page: u64,
    outset: u64,
    last: u64,
    offset: u64,
    from: u64,
    to: u64,
    in_page: u64,
    prev: Option<u64>,
    next: Option<u64>,
}

impl Page {
    /// Build a page with the standard sizing
    pub fn new(vars: &PageVars) -> Result<Self, PageError> {
        Self::with_sizing(vars, &Standard)
    }

    /// Build a page, letting `sizing` decide items per page and page count
    pub fn with_sizing(vars: &PageVars, sizing: &dyn Sizing) -> Result<Self, PageError> {
        if vars.items < 1 {
            return Err(VariableError::new("items", ">= 1", vars.items).into());
        }
        let items = sizing.items(vars.items).max(1);
        let last = sizing.pages(vars.count, items).max(1);
        if vars.page < 1 {
            return Err(VariableError::new("page", ">= 1", vars.page).into());
        }
        vars.validate_links()?;

        let page = if vars.page > last {
            let overflow = OverflowError {
                page: vars.page,
                last,
            };
            match vars.overflow {
                OverflowMode::Fail => return Err(overflow.into()),
                OverflowMode::LastPage => {
                    tracing::warn!(requested = vars.page, last, "page overflow, serving last page");
                    last
                }
            }
        } else {
            vars.page
        };

        let count = vars.count;
        let outset = vars.outset;
        // Saturating: a custom `Sizing` may report more pages than `count` fills.
        let skipped = items.saturating_mul(page - 1);
        let offset = skipped.saturating_add(outset);
        let from = skipped.saturating_add(1).min(count);
        let to = skipped.saturating_add(items).min(count);
        let in_page = (to - from).saturating_add(1).min(count);
        let prev = (page > 1).then(|| page - 1);
        let next = if page == last {
            vars.cycle.then_some(1)
        } else {
            Some(page + 1)
        };

        tracing::debug!(count, items, page, last, offset, "built page");

        Ok(Self {
            vars: vars.clone(),
            count,
            items,
            page,
            requested_page: vars.page,
            outset,
            last,
            offset,
            from,
            to,
            in_page,
            prev,
            next,
        })
    }

    /// Build the series for this page with an explicit window
    pub fn series(&self, spec: &WindowSpec) -> Result<Series, VariableError> {
        build_series(self.page, self.last, spec)
    }

    /// Build the series with the window from the vars
    pub fn default_series(&self) -> Result<Series, VariableError> {
        self.series(&self.vars.size)
    }

    /// Snapshot of this page and its series for serialization
    pub fn metadata(&self, spec: &WindowSpec) -> Result<Metadata, VariableError> {
        Ok(Metadata::new(self, self.series(spec)?))
    }

    /// The vars this page was built from
    pub fn vars(&self) -> &PageVars {
        &self.vars
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Effective items per page
    pub fn items(&self) -> u64 {
        self.items
    }

    /// Current page
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The page that was asked for; differs from [`Page::page`] after an
    /// overflow was recovered with [`OverflowMode::LastPage`]
    pub fn requested_page(&self) -> u64 {
        self.requested_page
    }

    /// Check if an overflowing request was redirected to the last page
    pub fn overflowed(&self) -> bool {
        self.requested_page != self.page
    }

    pub fn outset(&self) -> u64 {
        self.outset
    }

    /// Number of pages
    pub fn pages(&self) -> u64 {
        self.last
    }

    /// Last page, same as [`Page::pages`]
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Items to skip when fetching this page, outset included
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// 1-based position of the first item on this page (0 when empty)
    pub fn from(&self) -> u64 {
        self.from
    }

    /// 1-based position of the last item on this page (0 when empty)
    pub fn to(&self) -> u64 {
        self.to
    }

    /// Number of items on this page
    pub fn in_page(&self) -> u64 {
        self.in_page
    }

    pub fn prev(&self) -> Option<u64> {
        self.prev
    }

    pub fn next(&self) -> Option<u64> {
        self.next
    }
}
