// bstack - bstack-error
// Module: Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! bstack error handling library
//!
//! This library provides the error vocabulary for the bstack crates: a
//! categorised, `Copy` [`Error`] with a numeric code and a static message.
//!
//! # Error Categories
//!
//! ## Stack state errors (1000-1999)
//! - Stack empty (pop against zero elements)
//! - Stack full (push against a saturated bounded stack)
//!
//! ## Parameter errors (2000-2999)
//! - Invalid capacity
//!
//! # Usage
//!
//! ```
//! use bstack_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(ErrorCategory::Capacity, codes::STACK_FULL, "Stack is full");
//! assert!(error.is_capacity_error());
//! assert_eq!(Error::STACK_EMPTY.code, codes::STACK_EMPTY);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for bstack
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for bstack operations.
pub type Result<T> = core::result::Result<T, Error>;
