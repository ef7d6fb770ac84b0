// bstack - bstack
// Module: Diagnostic Channel
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Diagnostic channel for rejected stack operations.
//!
//! A rejected `push` or `pop` is not an error path: the operation becomes a
//! no-op and the stack hands a [`Diagnostic`] to its [`DiagnosticSink`].
//! Callers detect the rejection from the return value, never from the sink.

#[cfg(feature = "std")]
use std::sync::{Mutex, PoisonError};

use core::fmt;

use bstack_error::Error;

use crate::prelude::Arc;

/// The two conditions a stack rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Push against a bounded stack already at capacity
    StackFull,
    /// Pop against a stack holding no elements
    StackEmpty,
}

impl DiagnosticKind {
    /// The error value describing this condition
    #[must_use]
    pub const fn error(self) -> Error {
        match self {
            Self::StackFull => Error::STACK_FULL,
            Self::StackEmpty => Error::STACK_EMPTY,
        }
    }

    /// Human-readable description, without the `Error:` prefix
    #[must_use]
    pub const fn message(self) -> &'static str {
        self.error().message
    }

    /// Stable name used as a structured logging field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StackFull => "stack_full",
            Self::StackEmpty => "stack_empty",
        }
    }
}

/// A single rejected operation, with the stack state at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which condition caused the rejection
    pub kind:     DiagnosticKind,
    /// Number of elements at the time of the rejection
    pub len:      usize,
    /// Capacity of the stack, if bounded
    pub capacity: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    #[must_use]
    pub const fn new(kind: DiagnosticKind, len: usize, capacity: Option<usize>) -> Self {
        Self { kind, len, capacity }
    }

    /// The error value describing this diagnostic
    #[must_use]
    pub const fn error(&self) -> Error {
        self.kind.error()
    }

    /// Description of the rejection, without the `Error:` prefix
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the line written to standard error, e.g.
    /// `Error: Stack is full. Cannot push item.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message())
    }
}

/// Destination for diagnostics emitted by rejected operations.
///
/// Implementations must not panic; emitting is always best effort.
pub trait DiagnosticSink: Send + Sync {
    /// Handle one diagnostic
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Writes each diagnostic as one line on standard error
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        use std::io::Write;

        // A closed or broken stderr must not turn a no-op into a failure.
        let _ = writeln!(std::io::stderr().lock(), "{diagnostic}");
    }
}

/// Forwards diagnostics to the `log` facade at `warn` level
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[cfg(feature = "log")]
impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        log::warn!(
            target: "bstack",
            "{diagnostic} (kind={}, len={}, capacity={:?})",
            diagnostic.kind.as_str(),
            diagnostic.len,
            diagnostic.capacity
        );
    }
}

/// Emits diagnostics as structured `tracing` events at `warn` level
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            target: "bstack",
            kind = diagnostic.kind.as_str(),
            code = diagnostic.error().code,
            len = diagnostic.len,
            capacity = ?diagnostic.capacity,
            "{}",
            diagnostic
        );
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps every diagnostic in memory.
///
/// Share it with a stack through an `Arc` and inspect it afterwards.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

#[cfg(feature = "std")]
impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of recorded diagnostics
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of recorded diagnostics of the given kind
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(feature = "std")]
impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).push(*diagnostic);
    }
}

/// The sink a stack uses when none is configured.
///
/// Standard error with `std`; otherwise the `log` facade when available,
/// and nothing at all in a bare `no_std` build.
#[must_use]
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    #[cfg(feature = "std")]
    {
        Arc::new(StderrSink)
    }
    #[cfg(all(not(feature = "std"), feature = "log"))]
    {
        Arc::new(LogSink)
    }
    #[cfg(all(not(feature = "std"), not(feature = "log")))]
    {
        Arc::new(SilentSink)
    }
}
