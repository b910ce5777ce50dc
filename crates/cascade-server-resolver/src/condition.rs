// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request path condition with language cascade.
//!
//! Decides whether the current request path matches a list of page
//! patterns. Patterns are written against aliases, so detail pages are
//! first mapped to the best alias along the cascade.

use cascade_common_locale::{FallbackSequencer, LocaleCode};
use tracing::{debug, trace};

use crate::detail_page::DetailPagePattern;
use crate::error::PatternError;
use crate::manager::AliasManager;
use crate::path_matcher::{PagePatterns, PathMatcher};

#[derive(Debug, Clone)]
pub struct RequestPathCondition {
	unrestricted: bool,
	patterns: PagePatterns,
	manager: AliasManager,
	sequencer: FallbackSequencer,
	detail_pages: DetailPagePattern,
}

impl RequestPathCondition {
	/// `pages` is a newline-separated pattern list; matching is case-insensitive.
	///
	/// Only an empty `pages` matches every path. A list of blank lines
	/// matches nothing.
	pub fn new(
		pages: &str,
		matcher: &PathMatcher,
		manager: AliasManager,
		sequencer: FallbackSequencer,
		detail_pages: DetailPagePattern,
	) -> Result<Self, PatternError> {
		let matcher = PathMatcher::new(matcher.front_page().to_lowercase());
		let unrestricted = pages.is_empty();
		let patterns = matcher.compile(&pages.to_lowercase())?;
		if !unrestricted && patterns.is_empty() {
			debug!("page list has only blank lines, condition never matches");
		}

		Ok(Self {
			unrestricted,
			patterns,
			manager,
			sequencer,
			detail_pages,
		})
	}

	/// Evaluate against `request_path` in the current request locale.
	pub fn evaluate(&self, request_path: &str) -> bool {
		self.evaluate_for(request_path, None)
	}

	/// Evaluate against `request_path` for `locale` (current request locale if none).
	pub fn evaluate_for(&self, request_path: &str, locale: Option<&LocaleCode>) -> bool {
		if self.unrestricted {
			return true;
		}

		let path = if request_path == "/" {
			request_path
		} else {
			request_path.trim_end_matches('/')
		};

		let alias = if self.detail_pages.matches(path) {
			self.cascade_alias(path, locale)
		} else {
			self.manager.alias_by_path(path, locale).to_lowercase()
		};

		trace!(path, alias = %alias, "evaluating request path condition");
		self.patterns.matches(&alias) || (path != alias && self.patterns.matches(path))
	}

	/// Lower-cased alias of `path` along the cascade; the last candidate's
	/// result when none differs from `path`.
	fn cascade_alias(&self, path: &str, locale: Option<&LocaleCode>) -> String {
		let mut alias = path.to_lowercase();
		for candidate in &self.sequencer.cascade_for(locale) {
			alias = self.manager.alias_by_path(path, Some(candidate)).to_lowercase();
			if alias != path {
				break;
			}
		}
		alias
	}
}
