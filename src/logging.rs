// ABOUTME: Tracing subscriber setup for the library's binaries and tests
// ABOUTME: RUST_LOG-driven filtering with an info-level default

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! Structured logging initialization. Filtering follows `RUST_LOG` when set,
//! otherwise defaults to `info`.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops (the first
/// subscriber wins), which keeps test binaries from panicking when several
/// tests initialize logging.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
