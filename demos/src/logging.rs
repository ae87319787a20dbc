// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log output for the demos.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info,spotlight_session=debug";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a process-wide `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the default filter, which shows session
/// lifecycle transitions. Safe to call more than once.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt().with_env_filter(env_filter).try_init();
    });
}
