// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Path shape configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_detail_page_prefixes() -> Vec<String> {
	vec!["node".to_string(), "taxonomy/term".to_string()]
}

fn default_front_page() -> String {
	"/node".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfigLayer {
	pub detail_page_prefixes: Option<Vec<String>>,
	pub front_page: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.detail_page_prefixes.is_some() {
			self.detail_page_prefixes = other.detail_page_prefixes;
		}
		if other.front_page.is_some() {
			self.front_page = other.front_page;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		let detail_page_prefixes = self
			.detail_page_prefixes
			.unwrap_or_else(default_detail_page_prefixes)
			.into_iter()
			.map(|prefix| prefix.trim_matches('/').to_string())
			.filter(|prefix| !prefix.is_empty())
			.collect();

		PathsConfig {
			detail_page_prefixes,
			front_page: self.front_page.unwrap_or_else(default_front_page),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
	/// Canonical path prefixes that, followed by `/<numeric id>`, identify a
	/// detail page. Stored without leading or trailing slashes.
	pub detail_page_prefixes: Vec<String>,
	/// System path substituted for `<front>` in page patterns.
	pub front_page: String,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			detail_page_prefixes: default_detail_page_prefixes(),
			front_page: default_front_page(),
		}
	}
}

impl PathsConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.front_page.starts_with('/') {
			return Err(ConfigError::InvalidValue {
				key: "paths.front_page".to_string(),
				message: format!("'{}' must start with '/'", self.front_page),
			});
		}
		Ok(())
	}
}
