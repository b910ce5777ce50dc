// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::sections::LoggingConfig;

/// Build the log filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a global subscriber was already installed, which is
/// expected when the host application has set up its own.
pub fn init_tracing(config: &LoggingConfig) -> bool {
	tracing_subscriber::registry()
		.with(env_filter(config))
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.is_ok()
}
