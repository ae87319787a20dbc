// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Event State: small state machines over raw pointer streams.
//!
//! - [`tap`]: decides whether a pointer-up completes a tap or ends a drag.
//!
//! This crate is `no_std`.

#![no_std]

pub mod tap;
