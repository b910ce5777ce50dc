// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised while compiling path patterns.
///
/// Resolution itself never fails; only construction from configuration does.
#[derive(Debug, Error)]
pub enum PatternError {
	#[error("invalid detail page prefixes: {0}")]
	DetailPage(#[source] regex::Error),

	#[error("invalid page patterns: {0}")]
	PagePatterns(#[source] regex::Error),
}
