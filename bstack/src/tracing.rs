// bstack - bstack
// Module: Tracing Support
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for bstack
//!
//! Wraps the `tracing` crate with span and event helpers for stack
//! operations. Compiled only with the `tracing` feature.

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, trace_span, Level, Span};

use crate::operations::OperationType;

/// Trace events for stack operations
#[derive(Debug, Clone)]
pub struct StackTrace;

impl StackTrace {
    /// Create a span covering one stack operation
    #[inline]
    pub fn operation(op: OperationType, len: usize, capacity: Option<usize>) -> Span {
        trace_span!("stack_op", op = op.as_str(), len = len, capacity = ?capacity)
    }

    /// Create a span for stack construction
    #[inline]
    pub fn construct(initial_len: usize, capacity: Option<usize>) -> Span {
        debug_span!("stack_construct", initial_len = initial_len, capacity = ?capacity)
    }

    /// Record the result of a search
    #[inline]
    pub fn search_result(distance: isize) {
        trace!(distance = distance, found = distance >= 0, "search complete");
    }

    /// Record a rejected operation
    #[inline]
    pub fn rejected(op: OperationType, len: usize) {
        debug!(op = op.as_str(), len = len, "operation rejected");
    }
}
