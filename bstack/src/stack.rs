// bstack - bstack
// Module: Bounded Stack
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded, optionally capacity-limited LIFO stack.
//!
//! [`BoundedStack::push`] and [`BoundedStack::pop`] fail soft: a rejected
//! operation is a no-op, a [`Diagnostic`] goes to the stack's sink, and the
//! caller learns about it from the return value. [`BoundedStack::try_push`]
//! and [`BoundedStack::try_pop`] report the same conditions as
//! [`bstack_error::Error`] values instead, without emitting.

use core::fmt;

use bstack_error::{Error, Result};

use crate::{
    capacity::{BoundedCapacity, Capacity},
    diagnostics::{default_sink, Diagnostic, DiagnosticKind, DiagnosticSink},
    operations::{OperationCounter, OperationSummary, OperationTracking, OperationType},
    prelude::{Arc, Vec},
};
#[cfg(feature = "tracing")]
use crate::tracing::StackTrace;

/// A last-in-first-out stack with an optional fixed capacity.
///
/// Elements are stored bottom (index 0) to top (last index). The capacity is
/// fixed at construction and never changes.
///
/// # Over-capacity construction
///
/// [`BoundedStack::from_initial`] does not check the initial elements against
/// the capacity. A stack built that way holds more than its capacity:
/// [`full`](Self::full) reports `false` because it tests for exact equality,
/// pushes are still refused, and [`is_over_capacity`](Self::is_over_capacity)
/// reports `true`.
///
/// # Examples
///
/// ```
/// use bstack::{BoundedStack, SilentSink};
///
/// let mut stack = BoundedStack::builder()
///     .capacity(2)
///     .sink(SilentSink)
///     .build()
///     .unwrap();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3); // refused: the stack is full
///
/// assert_eq!(stack.size(), 2);
/// assert_eq!(stack.search(&1), 1);
/// assert_eq!(stack.pop(), Some(2));
/// ```
#[derive(Clone)]
pub struct BoundedStack<T> {
    /// Elements, bottom first
    items:    Vec<T>,
    /// Maximum element count, `None` when unbounded
    capacity: Option<Capacity>,
    /// Where rejected operations are reported
    sink:     Arc<dyn DiagnosticSink>,
    /// Per-stack operation counts
    stats:    OperationCounter,
}

impl<T> BoundedStack<T> {
    /// Creates an empty, unbounded stack.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, default_sink())
    }

    /// Creates an empty stack holding at most `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::from_parts(Vec::new(), Some(capacity), default_sink())
    }

    /// Creates a stack from `initial`, whose first element becomes the
    /// bottom of the stack.
    ///
    /// The length of `initial` is not checked against `capacity`; see the
    /// type-level documentation on over-capacity construction.
    #[must_use]
    pub fn from_initial<I>(initial: I, capacity: Option<Capacity>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(initial.into_iter().collect(), capacity, default_sink())
    }

    /// Starts a [`StackBuilder`].
    #[must_use]
    pub fn builder() -> StackBuilder<T> {
        StackBuilder::new()
    }

    fn from_parts(items: Vec<T>, capacity: Option<Capacity>, sink: Arc<dyn DiagnosticSink>) -> Self {
        #[cfg(feature = "tracing")]
        let _span = StackTrace::construct(items.len(), capacity.map(Capacity::get)).entered();

        let stack = Self {
            items,
            capacity,
            sink,
            stats: OperationCounter::new(),
        };
        stack.stats.record_operation(OperationType::Create);
        stack
    }

    /// Pushes `item` onto the top of the stack.
    ///
    /// If the stack is bounded and already holds `capacity` (or more)
    /// elements, `item` is dropped and a [`DiagnosticKind::StackFull`]
    /// diagnostic is emitted. The stack is left unchanged.
    pub fn push(&mut self, item: T) {
        if self.try_push(item).is_err() {
            self.emit(DiagnosticKind::StackFull);
        }
    }

    /// Pushes `item`, reporting a full stack as an error.
    ///
    /// No diagnostic is emitted; the error is the only signal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_FULL`] if the stack is bounded and holds at
    /// least `capacity` elements. `item` is dropped in that case.
    pub fn try_push(&mut self, item: T) -> Result<()> {
        #[cfg(feature = "tracing")]
        let _span = self.trace_span(OperationType::Push).entered();

        if self.at_or_over_capacity() {
            self.reject(OperationType::Push);
            return Err(Error::STACK_FULL);
        }
        self.items.push(item);
        self.stats.record_operation(OperationType::Push);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// Returns `None` and emits a [`DiagnosticKind::StackEmpty`] diagnostic
    /// if the stack is empty. For a stack of `Option<U>` a stored `None`
    /// pops as `Some(None)`, so it never looks like an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        match self.try_pop() {
            Ok(item) => Some(item),
            Err(_) => {
                self.emit(DiagnosticKind::StackEmpty);
                None
            }
        }
    }

    /// Removes and returns the top element, reporting an empty stack as an
    /// error.
    ///
    /// No diagnostic is emitted; the error is the only signal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_EMPTY`] if the stack holds no elements.
    pub fn try_pop(&mut self) -> Result<T> {
        #[cfg(feature = "tracing")]
        let _span = self.trace_span(OperationType::Pop).entered();

        match self.items.pop() {
            Some(item) => {
                self.stats.record_operation(OperationType::Pop);
                Ok(item)
            }
            None => {
                self.reject(OperationType::Pop);
                Err(Error::STACK_EMPTY)
            }
        }
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.stats.record_operation(OperationType::Peek);
        self.items.last()
    }

    /// Number of stored elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the stack is bounded and holds exactly `capacity` elements.
    ///
    /// Always `false` for an unbounded stack, and `false` for a stack
    /// constructed over capacity.
    #[must_use]
    pub fn full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.items.len() == capacity.get())
    }

    /// The fixed capacity, or `None` when unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<Capacity> {
        self.capacity
    }

    /// Whether the stack holds more elements than its capacity.
    ///
    /// Only possible through [`BoundedStack::from_initial`] or the builder's
    /// initial elements.
    #[must_use]
    pub fn is_over_capacity(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.items.len() > capacity.get())
    }

    /// Snapshot of this stack's operation counts.
    #[must_use]
    pub fn stats(&self) -> OperationSummary {
        self.stats.get_summary()
    }

    /// Reset this stack's operation counts to zero.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    fn at_or_over_capacity(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.items.len() >= capacity.get())
    }

    fn reject(&self, op: OperationType) {
        self.stats.record_rejection(op);
        #[cfg(feature = "tracing")]
        StackTrace::rejected(op, self.items.len());
    }

    fn emit(&self, kind: DiagnosticKind) {
        let diagnostic =
            Diagnostic::new(kind, self.items.len(), self.capacity.map(Capacity::get));
        self.sink.emit(&diagnostic);
    }

    #[cfg(feature = "tracing")]
    fn trace_span(&self, op: OperationType) -> crate::tracing::Span {
        StackTrace::operation(op, self.items.len(), self.capacity.map(Capacity::get))
    }
}

impl<T: PartialEq> BoundedStack<T> {
    /// Distance from the top of the first bottom-up occurrence of `element`.
    ///
    /// The top element is at distance 0, the one below it at 1, and so on.
    /// With duplicates the bottom-most occurrence wins, so `[5, 1, 5]`
    /// (bottom to top) searches `5` at distance 2. Returns -1 if `element`
    /// is not present.
    ///
    /// A stack of zero-sized elements can hold more than `isize::MAX` items;
    /// distances beyond that saturate at `isize::MAX`.
    #[must_use]
    pub fn search(&self, element: &T) -> isize {
        #[cfg(feature = "tracing")]
        let _span = self.trace_span(OperationType::Search).entered();

        self.stats.record_operation(OperationType::Search);
        let distance = self
            .items
            .iter()
            .position(|item| item == element)
            .map_or(-1, |index| distance_from_top(self.items.len(), index));

        #[cfg(feature = "tracing")]
        StackTrace::search_result(distance);
        distance
    }
}

/// Elements strictly above `index` in a stack of `len` elements.
///
/// `index` must be below `len`. Saturates at `isize::MAX`.
fn distance_from_top(len: usize, index: usize) -> isize {
    isize::try_from(len - 1 - index).unwrap_or(isize::MAX)
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BoundedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_initial(iter, None)
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .field("stats", &self.stats.get_summary())
            .finish_non_exhaustive()
    }
}

impl<T> BoundedCapacity for BoundedStack<T> {
    fn capacity_limit(&self) -> Option<usize> {
        self.capacity.map(Capacity::get)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn is_full(&self) -> bool {
        self.full()
    }
}

impl<T> OperationTracking for BoundedStack<T> {
    fn record_operation(&self, op_type: OperationType) {
        self.stats.record_operation(op_type);
    }

    fn operation_stats(&self) -> OperationSummary {
        self.stats.get_summary()
    }

    fn reset_operation_stats(&self) {
        self.stats.reset();
    }
}

/// Builder for [`BoundedStack`].
///
/// Collects the initial elements, the capacity and the diagnostic sink.
/// Nothing is validated until [`StackBuilder::build`].
pub struct StackBuilder<T> {
    initial:  Vec<T>,
    capacity: Option<usize>,
    sink:     Option<Arc<dyn DiagnosticSink>>,
}

impl<T> StackBuilder<T> {
    /// Create a builder for an empty, unbounded stack with the default sink
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial:  Vec::new(),
            capacity: None,
            sink:     None,
        }
    }

    /// Limit the stack to `capacity` elements
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Remove any capacity limit
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.capacity = None;
        self
    }

    /// Append initial elements, bottom first
    #[must_use]
    pub fn initial<I>(mut self, initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.initial.extend(initial);
        self
    }

    /// Report rejected operations to `sink`
    #[must_use]
    pub fn sink<S>(mut self, sink: S) -> Self
    where
        S: DiagnosticSink + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Report rejected operations to a sink shared with other owners
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INVALID_CAPACITY`] if a capacity of zero was set.
    pub fn build(self) -> Result<BoundedStack<T>> {
        let capacity = self.capacity.map(Capacity::new).transpose()?;
        let sink = self.sink.unwrap_or_else(default_sink);
        Ok(BoundedStack::from_parts(self.initial, capacity, sink))
    }
}

impl<T> Default for StackBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StackBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackBuilder")
            .field("initial_len", &self.initial.len())
            .field("capacity", &self.capacity)
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SilentSink;

    fn quiet<T>(capacity: Option<usize>) -> BoundedStack<T> {
        let builder = BoundedStack::builder().sink(SilentSink);
        let builder = match capacity {
            Some(limit) => builder.capacity(limit),
            None => builder,
        };
        builder.build().unwrap()
    }

    #[test]
    fn test_push_pop_lifo_order() {
        let mut stack = quiet(None);
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_try_push_at_capacity() {
        let mut stack = quiet(Some(1));
        assert!(stack.try_push('a').is_ok());
        assert_eq!(stack.try_push('b'), Err(Error::STACK_FULL));
        assert_eq!(stack.peek(), Some(&'a'));
    }

    #[test]
    fn test_try_pop_empty() {
        let mut stack: BoundedStack<u8> = quiet(None);
        assert_eq!(stack.try_pop(), Err(Error::STACK_EMPTY));
    }

    #[test]
    fn test_peek_empty_is_not_a_rejection() {
        let stack: BoundedStack<u8> = quiet(None);
        assert_eq!(stack.peek(), None);

        let summary = stack.stats();
        assert_eq!(summary.peeks, 1);
        assert_eq!(summary.rejected_pops, 0);
        assert_eq!(summary.rejections(), 0);
    }

    #[test]
    fn test_full_is_exact() {
        let mut stack = quiet(Some(2));
        assert!(!stack.full());
        stack.push(0);
        assert!(!stack.full());
        stack.push(0);
        assert!(stack.full());
        assert_eq!(stack.remaining_capacity(), Some(0));

        let unbounded: BoundedStack<u8> = quiet(None);
        assert!(!unbounded.full());
        assert_eq!(unbounded.capacity_limit(), None);
    }

    #[test]
    fn test_search_positions() {
        let stack = BoundedStack::from_iter([10, 20, 30]);
        assert_eq!(stack.search(&30), 0);
        assert_eq!(stack.search(&20), 1);
        assert_eq!(stack.search(&10), 2);
        assert_eq!(stack.search(&40), -1);
    }

    #[test]
    fn test_search_zero_sized_elements() {
        let stack: BoundedStack<()> = core::iter::repeat_n((), 5).collect();
        assert_eq!(stack.size(), 5);
        assert_eq!(stack.search(&()), 4);
    }

    #[test]
    fn test_distance_saturates_past_isize_max() {
        assert_eq!(distance_from_top(3, 0), 2);
        assert_eq!(distance_from_top(3, 2), 0);
        // Reachable only with zero-sized elements.
        assert_eq!(distance_from_top(usize::MAX, 0), isize::MAX);
        assert_eq!(distance_from_top(usize::MAX, usize::MAX - 1), 0);
        assert_eq!(distance_from_top(isize::MAX.unsigned_abs() + 1, 0), isize::MAX);
    }

    #[test]
    fn test_search_empty() {
        let stack: BoundedStack<i32> = BoundedStack::new();
        assert_eq!(stack.search(&0), -1);
    }

    #[test]
    fn test_zero_capacity_builder_fails() {
        let result = BoundedStack::<u8>::builder().capacity(0).build();
        assert_eq!(result.unwrap_err(), Error::INVALID_CAPACITY);
    }

    #[test]
    fn test_builder_unbounded_clears_capacity() {
        let stack = BoundedStack::<u8>::builder()
            .capacity(3)
            .unbounded()
            .sink(SilentSink)
            .build()
            .unwrap();
        assert_eq!(stack.capacity(), None);
    }

    #[test]
    fn test_stats_track_rejections() {
        let mut stack = quiet(Some(1));
        stack.push(1);
        stack.push(2);
        let _ = stack.pop();
        let _ = stack.pop();
        let _ = stack.search(&1);

        let stats = stack.stats();
        assert_eq!(stats.creates, 1);
        assert_eq!(stats.pushes, 1);
        assert_eq!(stats.rejected_pushes, 1);
        assert_eq!(stats.pops, 1);
        assert_eq!(stats.rejected_pops, 1);
        assert_eq!(stats.searches, 1);

        stack.reset_stats();
        assert_eq!(stack.operation_stats(), OperationSummary::default());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = quiet(Some(3));
        original.push(1);
        let mut copy = original.clone();
        copy.push(2);

        assert_eq!(original.size(), 1);
        assert_eq!(copy.size(), 2);
        assert_eq!(copy.capacity(), original.capacity());
    }
}
