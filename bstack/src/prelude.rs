// bstack - bstack
// Module: Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for bstack
//!
//! Unified imports for both std and `no_std` + `alloc` builds, so individual
//! modules do not repeat the cfg dance.

#[cfg(not(feature = "std"))]
pub use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
pub use std::{sync::Arc, vec::Vec};

pub use core::{
    fmt,
    fmt::Debug,
    iter::FromIterator,
};

pub use bstack_error::{codes, Error, ErrorCategory, Result};

pub use crate::{
    capacity::{BoundedCapacity, Capacity},
    diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, SilentSink},
    operations::{OperationSummary, OperationTracking, OperationType},
    stack::{BoundedStack, StackBuilder},
};
