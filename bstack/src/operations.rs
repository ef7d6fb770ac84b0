// bstack - bstack
// Module: Operation Tracking
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Operation tracking for bounded stacks
//!
//! Every stack owns an [`OperationCounter`] that records successful and
//! rejected operations. Counters are relaxed atomics so that `&self` queries
//! such as `search` can record themselves.

use core::sync::atomic::{AtomicU64, Ordering};

/// Operation types that can be tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// Stack construction
    Create,
    /// Push operation
    Push,
    /// Pop operation
    Pop,
    /// Peek at the top element
    Peek,
    /// Linear search for an element
    Search,
}

impl OperationType {
    /// Stable name used in trace events
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Peek => "peek",
            Self::Search => "search",
        }
    }
}

/// A counter for tracking operation counts
#[derive(Debug)]
pub struct OperationCounter {
    /// Counter for stack constructions
    creates:         AtomicU64,
    /// Counter for successful pushes
    pushes:          AtomicU64,
    /// Counter for successful pops
    pops:            AtomicU64,
    /// Counter for peeks
    peeks:           AtomicU64,
    /// Counter for searches
    searches:        AtomicU64,
    /// Counter for pushes refused because the stack was full
    rejected_pushes: AtomicU64,
    /// Counter for pops refused because the stack was empty
    rejected_pops:   AtomicU64,
}

// Manual implementation of Clone for OperationCounter since AtomicU64 doesn't implement Clone
impl Clone for OperationCounter {
    fn clone(&self) -> Self {
        Self {
            creates:         AtomicU64::new(self.creates.load(Ordering::Relaxed)),
            pushes:          AtomicU64::new(self.pushes.load(Ordering::Relaxed)),
            pops:            AtomicU64::new(self.pops.load(Ordering::Relaxed)),
            peeks:           AtomicU64::new(self.peeks.load(Ordering::Relaxed)),
            searches:        AtomicU64::new(self.searches.load(Ordering::Relaxed)),
            rejected_pushes: AtomicU64::new(self.rejected_pushes.load(Ordering::Relaxed)),
            rejected_pops:   AtomicU64::new(self.rejected_pops.load(Ordering::Relaxed)),
        }
    }
}

impl Default for OperationCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationCounter {
    /// Create a new operation counter with all counts at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            creates:         AtomicU64::new(0),
            pushes:          AtomicU64::new(0),
            pops:            AtomicU64::new(0),
            peeks:           AtomicU64::new(0),
            searches:        AtomicU64::new(0),
            rejected_pushes: AtomicU64::new(0),
            rejected_pops:   AtomicU64::new(0),
        }
    }

    /// Record an operation that completed
    pub fn record_operation(&self, op_type: OperationType) {
        let counter = match op_type {
            OperationType::Create => &self.creates,
            OperationType::Push => &self.pushes,
            OperationType::Pop => &self.pops,
            OperationType::Peek => &self.peeks,
            OperationType::Search => &self.searches,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an operation the stack refused.
    ///
    /// Only pushes and pops can be refused; other types are ignored.
    pub fn record_rejection(&self, op_type: OperationType) {
        match op_type {
            OperationType::Push => {
                self.rejected_pushes.fetch_add(1, Ordering::Relaxed);
            }
            OperationType::Pop => {
                self.rejected_pops.fetch_add(1, Ordering::Relaxed);
            }
            OperationType::Create | OperationType::Peek | OperationType::Search => {}
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.creates.store(0, Ordering::Relaxed);
        self.pushes.store(0, Ordering::Relaxed);
        self.pops.store(0, Ordering::Relaxed);
        self.peeks.store(0, Ordering::Relaxed);
        self.searches.store(0, Ordering::Relaxed);
        self.rejected_pushes.store(0, Ordering::Relaxed);
        self.rejected_pops.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all operation counts
    #[must_use]
    pub fn get_summary(&self) -> OperationSummary {
        OperationSummary {
            creates:         self.creates.load(Ordering::Relaxed),
            pushes:          self.pushes.load(Ordering::Relaxed),
            pops:            self.pops.load(Ordering::Relaxed),
            peeks:           self.peeks.load(Ordering::Relaxed),
            searches:        self.searches.load(Ordering::Relaxed),
            rejected_pushes: self.rejected_pushes.load(Ordering::Relaxed),
            rejected_pops:   self.rejected_pops.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of operation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    /// Number of stack constructions
    pub creates:         u64,
    /// Number of successful pushes
    pub pushes:          u64,
    /// Number of successful pops
    pub pops:            u64,
    /// Number of peeks
    pub peeks:           u64,
    /// Number of searches
    pub searches:        u64,
    /// Number of pushes refused because the stack was full
    pub rejected_pushes: u64,
    /// Number of pops refused because the stack was empty
    pub rejected_pops:   u64,
}

impl OperationSummary {
    /// Total number of refused operations
    #[must_use]
    pub const fn rejections(&self) -> u64 {
        self.rejected_pushes + self.rejected_pops
    }
}

/// Trait for types that need to track operation counts
pub trait OperationTracking {
    /// Record an operation occurred
    fn record_operation(&self, op_type: OperationType);

    /// Get the current operation statistics
    fn operation_stats(&self) -> OperationSummary;

    /// Reset operation counters
    fn reset_operation_stats(&self);
}
