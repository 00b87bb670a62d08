//! Error types for page construction and series building

use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A variable failed validation or coercion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected :{name} {expected}; got {value}")]
pub struct VariableError {
    /// Name of the offending variable
    pub name: &'static str,
    /// Human readable constraint, e.g. `">= 1"`
    pub expected: String,
    /// The rejected value, as it was received
    pub value: String,
}

impl VariableError {
    pub fn new(name: &'static str, expected: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name,
            expected: expected.into(),
            value: value.to_string(),
        }
    }
}

/// The requested page lies past the last page
///
/// This is the recoverable case: callers usually redirect to
/// [`OverflowError::last`] instead of failing the request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected :page in 1..{last}; got {page}")]
pub struct OverflowError {
    /// The page that was requested
    pub page: u64,
    /// The last valid page
    pub last: u64,
}

impl OverflowError {
    /// The range of pages that would have been accepted
    pub fn range(&self) -> RangeInclusive<u64> {
        1..=self.last
    }

    /// Last valid page, a sensible redirect target
    pub fn last(&self) -> u64 {
        self.last
    }
}

/// Errors raised while building a [`crate::Page`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid pagination variable: {0}")]
    Validation(#[from] VariableError),

    #[error("page overflow: {0}")]
    Overflow(#[from] OverflowError),
}

impl PageError {
    /// Check if this is the recoverable overflow case
    pub fn is_overflow(&self) -> bool {
        matches!(self, PageError::Overflow(_))
    }

    /// The overflow details, if any
    pub fn as_overflow(&self) -> Option<&OverflowError> {
        match self {
            PageError::Overflow(err) => Some(err),
            PageError::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_error_message() {
        let err = VariableError::new("items", ">= 1", 0);
        assert_eq!(err.to_string(), "expected :items >= 1; got 0");
    }

    #[test]
    fn test_overflow_range() {
        let err = OverflowError { page: 100, last: 5 };
        assert_eq!(err.range(), 1..=5);
        assert_eq!(err.last(), 5);
        assert_eq!(err.to_string(), "expected :page in 1..5; got 100");
    }

    #[test]
    fn test_page_error_kinds() {
        let overflow: PageError = OverflowError { page: 9, last: 3 }.into();
        assert!(overflow.is_overflow());
        assert_eq!(overflow.as_overflow().map(|e| e.page), Some(9));

        let invalid: PageError = VariableError::new("outset", ">= 0", -1).into();
        assert!(!invalid.is_overflow());
        assert!(invalid.as_overflow().is_none());
    }
}
