//! Pagination variables and their defaults

mod coerce;

use crate::error::VariableError;
use crate::series::WindowSpec;
use serde_json::Value;

/// What to do when the requested page is past the last page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// Fail with [`crate::PageError::Overflow`]
    #[default]
    Fail,
    /// Build the last page instead, keeping the requested page around
    LastPage,
}

impl OverflowMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "fail" | "exception" => Some(OverflowMode::Fail),
            "last_page" => Some(OverflowMode::LastPage),
            _ => None,
        }
    }
}

/// Inputs for building a [`crate::Page`]
///
/// Built fresh for every request; nothing here is shared or mutated
/// across calls. Defaults:
///
/// | field          | default          |
/// |----------------|------------------|
/// | `count`        | `0`              |
/// | `items`        | `20`             |
/// | `page`         | `1`              |
/// | `outset`       | `0`              |
/// | `cycle`        | `false`          |
/// | `size`         | `[1, 4, 4, 1]`   |
/// | `page_param`   | `"page"`         |
/// | `request_path` | none             |
/// | `fragment`     | none             |
/// | `overflow`     | `Fail`           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVars {
    /// Total number of items in the collection
    pub count: u64,
    /// Items per page
    pub items: u64,
    /// Requested page, 1-based
    pub page: u64,
    /// Items skipped before the first page
    pub outset: u64,
    /// Let `next` wrap from the last page to the first
    pub cycle: bool,
    /// Window used by [`crate::Page::default_series`]
    pub size: WindowSpec,
    /// Query parameter carrying the page number in links
    pub page_param: String,
    /// Path links point at, without a query string
    pub request_path: Option<String>,
    /// URL fragment appended to links, e.g. `#results`
    pub fragment: Option<String>,
    /// Overflow handling
    pub overflow: OverflowMode,
}

impl Default for PageVars {
    fn default() -> Self {
        Self {
            count: 0,
            items: 20,
            page: 1,
            outset: 0,
            cycle: false,
            size: WindowSpec::default(),
            page_param: "page".to_string(),
            request_path: None,
            fragment: None,
            overflow: OverflowMode::Fail,
        }
    }
}

impl PageVars {
    /// Create vars for a collection of `count` items
    pub fn new(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: u64) -> Self {
        self.items = items;
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    pub fn with_outset(mut self, outset: u64) -> Self {
        self.outset = outset;
        self
    }

    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_size(mut self, size: impl Into<WindowSpec>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_page_param(mut self, page_param: impl Into<String>) -> Self {
        self.page_param = page_param.into();
        self
    }

    pub fn with_request_path(mut self, request_path: impl Into<String>) -> Self {
        self.request_path = Some(request_path.into());
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    /// Build vars from a loosely typed map, as assembled from request params.
    ///
    /// Integers may arrive as JSON numbers or as decimal strings. Missing keys
    /// keep their defaults; unknown keys are ignored. Numeric variables are
    /// coerced in the order `items`, `outset`, `count`, `page` and the first
    /// failure is returned.
    pub fn from_json(value: &Value) -> Result<Self, VariableError> {
        let map = value
            .as_object()
            .ok_or_else(|| VariableError::new("vars", "to be an object", value))?;
        let mut vars = Self::default();

        if let Some(items) = map.get("items") {
            vars.items = coerce::integer("items", items, 1)?;
        }
        if let Some(outset) = map.get("outset") {
            vars.outset = coerce::integer("outset", outset, 0)?;
        }
        if let Some(count) = map.get("count") {
            vars.count = coerce::integer("count", count, 0)?;
        }
        if let Some(page) = map.get("page") {
            vars.page = coerce::integer("page", page, 1)?;
        }
        if let Some(cycle) = map.get("cycle") {
            vars.cycle = coerce::boolean("cycle", cycle)?;
        }
        if let Some(size) = map.get("size") {
            vars.size = WindowSpec::from_json(size)?;
        }
        if let Some(page_param) = map.get("page_param") {
            vars.page_param = coerce::string("page_param", page_param)?;
        }
        if let Some(request_path) = map.get("request_path") {
            vars.request_path = Some(coerce::string("request_path", request_path)?);
        }
        if let Some(fragment) = map.get("fragment") {
            vars.fragment = Some(coerce::string("fragment", fragment)?);
        }
        if let Some(overflow) = map.get("overflow") {
            vars.overflow = overflow
                .as_str()
                .and_then(OverflowMode::parse)
                .ok_or_else(|| VariableError::new("overflow", "in [fail, last_page]", overflow))?;
        }
        Ok(vars)
    }

    /// Check the link-building options
    pub(crate) fn validate_links(&self) -> Result<(), VariableError> {
        if self.page_param.is_empty() {
            return Err(VariableError::new("page_param", "to be non-empty", "\"\""));
        }
        if let Some(path) = &self.request_path {
            if path.contains('?') {
                return Err(VariableError::new(
                    "request_path",
                    "to be a path without a query string",
                    path,
                ));
            }
        }
        Ok(())
    }
}
