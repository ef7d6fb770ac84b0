// bstack - bstack
// Module: Crate Root
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! # bstack
//!
//! A bounded, optionally capacity-limited last-in-first-out stack.
//!
//! [`BoundedStack`] supports push, pop, peek, emptiness and fullness checks,
//! a size query and a linear search that reports the distance from the top.
//! Rejected pushes and pops fail soft: the operation is a no-op, a
//! [`Diagnostic`] is handed to the stack's [`DiagnosticSink`], and the return
//! value tells the caller what happened.
//!
//! ```
//! use bstack::BoundedStack;
//!
//! let mut stack = BoundedStack::from_iter([5, 1, 5]);
//! assert_eq!(stack.search(&5), 2); // bottom-most occurrence wins
//! assert_eq!(stack.pop(), Some(5));
//! ```
//!
//! # Features
//!
//! - `std` (default): standard-error diagnostics and the recording sink.
//! - `log`: [`LogSink`](diagnostics::LogSink), forwarding to the `log` facade.
//! - `tracing`: spans around construct, push, pop and search, and
//!   [`TracingSink`](diagnostics::TracingSink).
//!
//! Without `std` the crate is `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub use bstack_error::{codes, Error, ErrorCategory, Result};

/// Capacity limits and the bounded-capacity trait
pub mod capacity;
/// Diagnostic channel for rejected operations
pub mod diagnostics;
/// Per-stack operation counters
pub mod operations;
pub mod prelude;
/// The bounded stack itself
pub mod stack;
/// Tracing helpers, enabled with the `tracing` feature
#[cfg(feature = "tracing")]
pub mod tracing;

pub use capacity::{BoundedCapacity, Capacity};
#[cfg(feature = "log")]
pub use diagnostics::LogSink;
#[cfg(feature = "std")]
pub use diagnostics::{RecordingSink, StderrSink};
#[cfg(feature = "tracing")]
pub use diagnostics::TracingSink;
pub use diagnostics::{default_sink, Diagnostic, DiagnosticKind, DiagnosticSink, SilentSink};
pub use operations::{OperationCounter, OperationSummary, OperationTracking, OperationType};
pub use stack::{BoundedStack, StackBuilder};
