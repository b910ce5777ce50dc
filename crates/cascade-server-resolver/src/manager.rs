// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cached alias manager.
//!
//! Exact-locale alias lookups against an [`AliasStore`], memoized in an
//! [`AliasLookupCache`]. The cascade logic in [`AliasResolver`](crate::AliasResolver)
//! decorates this manager.

use std::fmt;
use std::sync::Arc;

use cascade_common_locale::{LocaleCode, LocaleRegistry};
use tracing::trace;

use crate::cache::AliasLookupCache;
use crate::store::AliasStore;

#[derive(Clone)]
pub struct AliasManager {
	store: Arc<dyn AliasStore>,
	registry: Arc<dyn LocaleRegistry>,
	cache: Arc<AliasLookupCache>,
}

impl fmt::Debug for AliasManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AliasManager")
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}

impl AliasManager {
	pub fn new(
		store: Arc<dyn AliasStore>,
		registry: Arc<dyn LocaleRegistry>,
		cache: Arc<AliasLookupCache>,
	) -> Self {
		Self {
			store,
			registry,
			cache,
		}
	}

	pub fn store(&self) -> &dyn AliasStore {
		self.store.as_ref()
	}

	pub fn cache(&self) -> &AliasLookupCache {
		&self.cache
	}

	fn locale_or_current(&self, locale: Option<&LocaleCode>) -> LocaleCode {
		locale
			.cloned()
			.unwrap_or_else(|| self.registry.current_request_locale())
	}

	/// System path for `alias`, or `alias` itself when there is none.
	///
	/// Misses are remembered per locale and short-circuit later lookups.
	pub fn path_by_alias(&self, alias: &str, locale: Option<&LocaleCode>) -> String {
		let locale = self.locale_or_current(locale);

		if self.cache.has_no_path(&locale, alias) {
			return alias.to_string();
		}

		if let Some(path) = self.cache.cached_path(&locale, alias) {
			return path;
		}

		match self.store.lookup_path_for_alias(alias, &locale) {
			Some(path) => {
				self.cache.record_alias(&locale, &path, alias);
				path
			}
			None => {
				trace!(alias, locale = %locale, "no path for alias");
				self.cache.mark_no_path(&locale, alias);
				alias.to_string()
			}
		}
	}

	/// Alias for the system `path`, or `path` itself when there is none.
	pub fn alias_by_path(&self, path: &str, locale: Option<&LocaleCode>) -> String {
		let locale = self.locale_or_current(locale);

		if let Some(alias) = self.cache.cached_alias(&locale, path) {
			return alias;
		}

		if self.cache.has_no_alias(&locale, path) {
			return path.to_string();
		}

		match self.store.lookup_alias_for_path(path, &locale) {
			Some(alias) => {
				self.cache.record_alias(&locale, path, &alias);
				alias
			}
			None => {
				trace!(path, locale = %locale, "no alias for path");
				self.cache.mark_no_alias(&locale, path);
				path.to_string()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::InMemoryAliasStore;
	use cascade_common_locale::StaticLocaleRegistry;

	fn manager() -> (AliasManager, Arc<InMemoryAliasStore>) {
		let store = Arc::new(InMemoryAliasStore::new());
		store.insert("/about-us", "/node/5", "en");
		store.insert("/a-propos", "/node/5", "fr");

		let registry = StaticLocaleRegistry::new("en".into(), ["fr".into()])
			.with_current_locale("fr".into());
		let manager = AliasManager::new(
			store.clone(),
			Arc::new(registry),
			Arc::new(AliasLookupCache::new()),
		);
		(manager, store)
	}

	#[test]
	fn test_path_by_alias_hit_is_cached() {
		let (manager, store) = manager();
		let en = LocaleCode::from("en");

		assert_eq!(manager.path_by_alias("/about-us", Some(&en)), "/node/5");
		assert_eq!(manager.cache().cached_alias(&en, "/node/5").as_deref(), Some("/about-us"));

		// Served from the lookup map once the store forgets it.
		store.remove("/node/5", &en);
		assert_eq!(manager.path_by_alias("/about-us", Some(&en)), "/node/5");
	}

	#[test]
	fn test_path_by_alias_miss_returns_input_and_memoizes() {
		let (manager, store) = manager();
		let en = LocaleCode::from("en");

		assert_eq!(manager.path_by_alias("/missing", Some(&en)), "/missing");
		assert!(manager.cache().has_no_path(&en, "/missing"));

		// The negative entry wins over a later store write until cleared.
		store.insert("/missing", "/node/8", "en");
		assert_eq!(manager.path_by_alias("/missing", Some(&en)), "/missing");
		manager.cache().clear();
		assert_eq!(manager.path_by_alias("/missing", Some(&en)), "/node/8");
	}

	#[test]
	fn test_defaults_to_current_request_locale() {
		let (manager, _) = manager();
		assert_eq!(manager.path_by_alias("/a-propos", None), "/node/5");
		assert_eq!(manager.alias_by_path("/node/5", None), "/a-propos");
	}

	#[test]
	fn test_alias_by_path_miss_returns_input() {
		let (manager, _) = manager();
		let de = LocaleCode::from("de");

		assert_eq!(manager.alias_by_path("/node/5", Some(&de)), "/node/5");
		assert!(manager.cache().has_no_alias(&de, "/node/5"));
	}
}
