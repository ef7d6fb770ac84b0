// bstack - bstack
// Module: Capacity Limits
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Capacity limits for bounded collections
//!
//! [`Capacity`] is the positive maximum element count of a bounded stack.
//! [`BoundedCapacity`] is the query surface shared by capacity-aware
//! containers.

use core::{fmt, num::NonZeroUsize};

use bstack_error::{Error, Result};

/// Maximum number of elements a bounded stack may hold.
///
/// Always positive; a zero capacity is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Creates a capacity of `limit` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INVALID_CAPACITY`] if `limit` is zero.
    pub const fn new(limit: usize) -> Result<Self> {
        match NonZeroUsize::new(limit) {
            Some(limit) => Ok(Self(limit)),
            None => Err(Error::INVALID_CAPACITY),
        }
    }

    /// Creates a capacity from an already-validated non-zero count.
    #[must_use]
    pub const fn from_non_zero(limit: NonZeroUsize) -> Self {
        Self(limit)
    }

    /// Returns the limit as a plain element count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = Error;

    fn try_from(limit: usize) -> Result<Self> {
        Self::new(limit)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(limit: NonZeroUsize) -> Self {
        Self::from_non_zero(limit)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> Self {
        capacity.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for types with an optional bounded capacity
pub trait BoundedCapacity {
    /// Get the maximum number of elements this container can hold, or `None`
    /// when it is unbounded
    fn capacity_limit(&self) -> Option<usize>;

    /// Get the current number of elements in the container
    fn len(&self) -> usize;

    /// Check if the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the container holds exactly its capacity.
    ///
    /// Unbounded containers are never full. The comparison is exact: a
    /// container that somehow holds more than its capacity is not full.
    fn is_full(&self) -> bool {
        self.capacity_limit().is_some_and(|limit| self.len() == limit)
    }

    /// Get the remaining capacity, saturating at zero, or `None` when the
    /// container is unbounded
    fn remaining_capacity(&self) -> Option<usize> {
        self.capacity_limit().map(|limit| limit.saturating_sub(self.len()))
    }
}
