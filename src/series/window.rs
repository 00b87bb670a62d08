//! Window specifications controlling which pages a series shows

use crate::error::VariableError;
use serde_json::Value;

const OUTER_EXPECTED: &str = "to be [] or an integer >= 1 or 4 integers >= 0";

/// Shape of the visible window around the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSpec {
    /// Render no pagination control at all
    Empty,
    /// A contiguous window of `size` pages, no gaps
    Centered(u64),
    /// `[outer_start, inner_before, inner_after, outer_end]`, with gaps between
    Outer([u64; 4]),
}

impl Default for WindowSpec {
    fn default() -> Self {
        WindowSpec::Outer([1, 4, 4, 1])
    }
}

impl WindowSpec {
    /// Check the window can be used to build a series
    pub fn validate(&self) -> Result<(), VariableError> {
        match self {
            WindowSpec::Centered(0) => Err(VariableError::new("size", ">= 1", 0)),
            _ => Ok(()),
        }
    }

    /// Parse a loosely typed window spec.
    ///
    /// `[]` is the empty spec, a bare integer is a centered window and an
    /// array of exactly four non-negative integers is an outer window.
    pub fn from_json(value: &Value) -> Result<Self, VariableError> {
        let invalid = || VariableError::new("size", OUTER_EXPECTED, value);
        match value {
            Value::Number(number) => match number.as_u64() {
                Some(size) if size >= 1 => Ok(WindowSpec::Centered(size)),
                _ => Err(invalid()),
            },
            Value::Array(items) if items.is_empty() => Ok(WindowSpec::Empty),
            Value::Array(items) if items.len() == 4 => {
                let mut outer = [0u64; 4];
                for (slot, item) in outer.iter_mut().zip(items) {
                    *slot = item.as_u64().ok_or_else(invalid)?;
                }
                Ok(WindowSpec::Outer(outer))
            }
            _ => Err(invalid()),
        }
    }

    /// Build a spec from a plain slice: 0, 1 or 4 elements
    pub fn from_slice(values: &[u32]) -> Result<Self, VariableError> {
        match *values {
            [] => Ok(WindowSpec::Empty),
            [0] => Err(VariableError::new("size", ">= 1", 0)),
            [size] => Ok(WindowSpec::Centered(u64::from(size))),
            [a, b, c, d] => Ok(WindowSpec::Outer([
                u64::from(a),
                u64::from(b),
                u64::from(c),
                u64::from(d),
            ])),
            _ => Err(VariableError::new("size", OUTER_EXPECTED, format!("{values:?}"))),
        }
    }

    /// Check if this spec renders nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, WindowSpec::Empty)
    }
}

impl From<[u64; 4]> for WindowSpec {
    fn from(outer: [u64; 4]) -> Self {
        WindowSpec::Outer(outer)
    }
}

impl From<u64> for WindowSpec {
    fn from(size: u64) -> Self {
        WindowSpec::Centered(size)
    }
}
