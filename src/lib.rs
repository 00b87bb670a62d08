//! Page Series: pagination arithmetic and navigation series
//!
//! This crate provides the core of a pagination control:
//! - A validated page model (page count, offsets, item range, prev/next)
//! - Series building with gap markers (`1 … 7 8 [9] 10 11 … 36`)
//! - Pluggable sizing strategies for page size and page count limits
//! - Serializable metadata and a flat buffer for client-side renderers
//!
//! ```
//! use page_series::{Page, PageVars, SeriesItem, WindowSpec};
//!
//! let page = Page::new(&PageVars::new(1000).with_page(20)).unwrap();
//! assert_eq!(page.last(), 50);
//! assert_eq!(page.prev(), Some(19));
//!
//! let series = page.series(&WindowSpec::Outer([1, 2, 2, 1])).unwrap();
//! assert_eq!(series.to_string(), "1 … 18 19 [20] 21 22 … 50");
//! assert!(series.iter().any(|item| *item == SeriesItem::Current(20)));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod series;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPager;

// Re-export primary types
pub use config::{OverflowMode, PageVars};
pub use error::{OverflowError, PageError, VariableError};
pub use model::{Capped, Metadata, Page, Sizing, Standard};
pub use series::{build_series, Series, SeriesItem, WindowSpec};
