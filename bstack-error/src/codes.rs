// bstack - bstack-error
// Module: Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for bstack
//!
//! Codes are grouped by range: stack state errors live in 1000-1999 and
//! parameter errors in 2000-2999.

// Stack state error codes (1000-1999)
/// Pop against a stack holding no elements
pub const STACK_EMPTY: u16 = 1000;
/// Push against a bounded stack that already holds `capacity` elements
pub const STACK_FULL: u16 = 1001;

// Parameter error codes (2000-2999)
/// A capacity of zero was requested
pub const INVALID_CAPACITY: u16 = 2000;
