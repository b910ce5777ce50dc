// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Alias lookup cache.
//!
//! Holds the positive lookup map (`locale -> path -> alias`) and the negative
//! memo of lookups known to miss, so repeated requests do not hit the store.

use std::collections::{HashMap, HashSet};

use cascade_common_locale::LocaleCode;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct CacheState {
	lookup_map: HashMap<LocaleCode, HashMap<String, String>>,
	no_path: HashMap<LocaleCode, HashSet<String>>,
	no_alias: HashMap<LocaleCode, HashSet<String>>,
}

/// Process-wide alias lookup cache owned by the host.
#[derive(Debug, Default)]
pub struct AliasLookupCache {
	state: RwLock<CacheState>,
}

impl AliasLookupCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Cached alias for `path` under `locale`.
	pub fn cached_alias(&self, locale: &LocaleCode, path: &str) -> Option<String> {
		self
			.state
			.read()
			.lookup_map
			.get(locale)
			.and_then(|paths| paths.get(path))
			.cloned()
	}

	/// Cached system path whose alias under `locale` is `alias`.
	pub fn cached_path(&self, locale: &LocaleCode, alias: &str) -> Option<String> {
		self.state.read().lookup_map.get(locale).and_then(|paths| {
			paths
				.iter()
				.find(|(_, cached)| cached.as_str() == alias)
				.map(|(path, _)| path.clone())
		})
	}

	pub fn record_alias(&self, locale: &LocaleCode, path: &str, alias: &str) {
		self
			.state
			.write()
			.lookup_map
			.entry(locale.clone())
			.or_default()
			.insert(path.to_string(), alias.to_string());
	}

	/// Whether `alias` is known to have no path under `locale`.
	pub fn has_no_path(&self, locale: &LocaleCode, alias: &str) -> bool {
		self
			.state
			.read()
			.no_path
			.get(locale)
			.is_some_and(|aliases| aliases.contains(alias))
	}

	pub fn mark_no_path(&self, locale: &LocaleCode, alias: &str) {
		self
			.state
			.write()
			.no_path
			.entry(locale.clone())
			.or_default()
			.insert(alias.to_string());
	}

	/// Forget a negative alias lookup. Returns whether an entry was removed.
	pub fn clear_no_path(&self, locale: &LocaleCode, alias: &str) -> bool {
		let mut state = self.state.write();
		let Some(aliases) = state.no_path.get_mut(locale) else {
			return false;
		};
		let removed = aliases.remove(alias);
		if aliases.is_empty() {
			state.no_path.remove(locale);
		}
		removed
	}

	/// Whether `path` is known to have no alias under `locale`.
	pub fn has_no_alias(&self, locale: &LocaleCode, path: &str) -> bool {
		self
			.state
			.read()
			.no_alias
			.get(locale)
			.is_some_and(|paths| paths.contains(path))
	}

	pub fn mark_no_alias(&self, locale: &LocaleCode, path: &str) {
		self
			.state
			.write()
			.no_alias
			.entry(locale.clone())
			.or_default()
			.insert(path.to_string());
	}

	/// Drop every negative entry, keeping resolved aliases.
	pub fn clear_negative(&self) {
		let mut state = self.state.write();
		state.no_path.clear();
		state.no_alias.clear();
	}

	/// Drop everything, e.g. after aliases were saved or deleted.
	pub fn clear(&self) {
		let mut state = self.state.write();
		state.lookup_map.clear();
		state.no_path.clear();
		state.no_alias.clear();
		tracing::debug!("alias lookup cache cleared");
	}
}
