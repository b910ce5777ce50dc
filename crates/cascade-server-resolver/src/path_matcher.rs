// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page pattern matching.
//!
//! Patterns are one per line, `*` is a wildcard, and `<front>` stands for
//! the front page path. A path matches when the whole path matches any line.

use regex::Regex;

use crate::error::PatternError;

const FRONT_PAGE_TOKEN: &str = "<front>";

/// Compiles page pattern lists against a known front page path.
#[derive(Debug, Clone)]
pub struct PathMatcher {
	front_page: String,
}

impl PathMatcher {
	pub fn new(front_page: impl Into<String>) -> Self {
		Self {
			front_page: front_page.into(),
		}
	}

	pub fn front_page(&self) -> &str {
		&self.front_page
	}

	pub fn compile(&self, patterns: &str) -> Result<PagePatterns, PatternError> {
		let alternatives: Vec<String> = patterns
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(|line| {
				if line == FRONT_PAGE_TOKEN {
					regex::escape(&self.front_page)
				} else {
					regex::escape(line).replace(r"\*", ".*")
				}
			})
			.collect();

		if alternatives.is_empty() {
			return Ok(PagePatterns { regex: None });
		}

		let regex = Regex::new(&format!("^(?:{})$", alternatives.join("|")))
			.map_err(PatternError::PagePatterns)?;
		Ok(PagePatterns { regex: Some(regex) })
	}

	/// One-shot convenience for [`compile`](Self::compile) then match.
	pub fn matches(&self, path: &str, patterns: &str) -> Result<bool, PatternError> {
		Ok(self.compile(patterns)?.matches(path))
	}
}

/// A compiled pattern list.
#[derive(Debug, Clone)]
pub struct PagePatterns {
	regex: Option<Regex>,
}

impl PagePatterns {
	pub fn is_empty(&self) -> bool {
		self.regex.is_none()
	}

	pub fn matches(&self, path: &str) -> bool {
		self
			.regex
			.as_ref()
			.is_some_and(|regex| regex.is_match(path))
	}
}
