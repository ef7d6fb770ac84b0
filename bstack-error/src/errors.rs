// bstack - bstack-error
// Module: Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error type shared by every bstack crate.
//!
//! Errors are small `Copy` values: a category, a numeric code and a static
//! message. They never allocate, so they are usable without `alloc`.

use core::fmt;

use crate::codes;

/// `Error` categories for bstack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity limits (a bounded stack refused an element)
    Capacity  = 1,
    /// Operations that are invalid for the current contents
    State     = 2,
    /// Invalid arguments supplied at construction time
    Parameter = 3,
}

impl ErrorCategory {
    /// Stable lower-case name of the category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Capacity => "capacity",
            Self::State => "state",
            Self::Parameter => "parameter",
        }
    }
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// bstack `Error` type
///
/// Categorised error with a code from [`codes`] and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Capacity of zero requested
    pub const INVALID_CAPACITY: Self = Self::new(
        ErrorCategory::Parameter,
        codes::INVALID_CAPACITY,
        "Stack capacity must be a positive integer",
    );
    /// Pop against an empty stack
    pub const STACK_EMPTY: Self = Self::new(
        ErrorCategory::State,
        codes::STACK_EMPTY,
        "Stack is empty. Cannot pop item.",
    );
    /// Push against a saturated bounded stack
    pub const STACK_FULL: Self = Self::new(
        ErrorCategory::Capacity,
        codes::STACK_FULL,
        "Stack is full. Cannot push item.",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a capacity error
    #[must_use]
    pub const fn is_capacity_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Capacity)
    }

    /// Check if this is a state error
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.category, ErrorCategory::State)
    }

    /// Check if this is a parameter error
    #[must_use]
    pub const fn is_parameter_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Parameter)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constants() {
        assert_eq!(Error::STACK_FULL.code, codes::STACK_FULL);
        assert!(Error::STACK_FULL.is_capacity_error());

        assert_eq!(Error::STACK_EMPTY.code, codes::STACK_EMPTY);
        assert!(Error::STACK_EMPTY.is_state_error());

        assert_eq!(Error::INVALID_CAPACITY.code, codes::INVALID_CAPACITY);
        assert!(Error::INVALID_CAPACITY.is_parameter_error());
    }

    #[test]
    fn test_error_display() {
        use std::string::ToString;

        // 1001 == 0x03E9
        assert_eq!(
            Error::STACK_FULL.to_string(),
            "[Capacity][E03E9] Stack is full. Cannot push item."
        );
        assert_eq!(
            Error::STACK_EMPTY.to_string(),
            "[State][E03E8] Stack is empty. Cannot pop item."
        );
    }

    #[test]
    fn test_constants_differ_in_category_and_code() {
        let all = [Error::STACK_EMPTY, Error::STACK_FULL, Error::INVALID_CAPACITY];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code, b.code);
                assert_ne!(a.category, b.category);
            }
        }
    }
}
