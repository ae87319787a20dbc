// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces of the spotlight demos: log setup and a headless host.

pub mod logging;
pub mod sim;
