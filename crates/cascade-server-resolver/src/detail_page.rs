// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use cascade_common_config::PathsConfig;
use regex::Regex;

use crate::error::PatternError;

/// Recognizes canonical detail-page paths such as `/node/5` or
/// `/taxonomy/term/12`: a configured prefix followed by a numeric id at the
/// end of the path.
#[derive(Debug, Clone)]
pub struct DetailPagePattern {
	regex: Option<Regex>,
}

impl DetailPagePattern {
	pub fn from_prefixes<I, S>(prefixes: I) -> Result<Self, PatternError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let alternatives: Vec<String> = prefixes
			.into_iter()
			.map(|prefix| prefix.as_ref().trim_matches('/').to_string())
			.filter(|prefix| !prefix.is_empty())
			.map(|prefix| regex::escape(&prefix))
			.collect();

		if alternatives.is_empty() {
			return Ok(Self { regex: None });
		}

		// Unanchored at the start: any path ending in `<prefix>/<id>` qualifies.
		let pattern = format!("(?:{})/[0-9]+$", alternatives.join("|"));
		let regex = Regex::new(&pattern).map_err(PatternError::DetailPage)?;
		Ok(Self { regex: Some(regex) })
	}

	pub fn from_config(config: &PathsConfig) -> Result<Self, PatternError> {
		Self::from_prefixes(&config.detail_page_prefixes)
	}

	pub fn matches(&self, path: &str) -> bool {
		self
			.regex
			.as_ref()
			.is_some_and(|regex| regex.is_match(path))
	}
}
