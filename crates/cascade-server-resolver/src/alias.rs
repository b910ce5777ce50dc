// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cascade-aware alias resolution.
//!
//! Inbound: an alias that does not exist in the request locale is retried
//! under the next-best locale, then under the universal fallback locale.
//! Outbound: a detail page without an alias in the requested locale takes
//! the first alias found along the full cascade.

use cascade_common_locale::{FallbackSequencer, LocaleCode};
use tracing::{debug, trace};

use crate::detail_page::DetailPagePattern;
use crate::manager::AliasManager;

/// Decorates an [`AliasManager`] with language cascade fallback.
#[derive(Debug, Clone)]
pub struct AliasResolver {
	manager: AliasManager,
	sequencer: FallbackSequencer,
	universal_fallback: LocaleCode,
	detail_pages: DetailPagePattern,
}

impl AliasResolver {
	pub fn new(
		manager: AliasManager,
		sequencer: FallbackSequencer,
		universal_fallback: LocaleCode,
		detail_pages: DetailPagePattern,
	) -> Self {
		Self {
			manager,
			sequencer,
			universal_fallback,
			detail_pages,
		}
	}

	pub fn manager(&self) -> &AliasManager {
		&self.manager
	}

	pub fn universal_fallback(&self) -> &LocaleCode {
		&self.universal_fallback
	}

	/// System path for an inbound `alias`.
	///
	/// Returns `alias` unchanged when no locale along the fallback has it.
	/// A fallback hit is cached under the next-best locale, including when
	/// the hit came from the universal fallback locale.
	#[tracing::instrument(level = "debug", skip(self))]
	pub fn resolve_alias_to_path(&self, alias: &str, locale: Option<&LocaleCode>) -> String {
		let resolved = self.manager.path_by_alias(alias, locale);

		let locale = self.sequencer.effective_locale(locale);
		if !self.manager.cache().has_no_path(&locale, alias) {
			return resolved;
		}

		let store = self.manager.store();
		let next_best = self.sequencer.next_best(&locale);

		let found = if next_best != locale {
			store.lookup_path_for_alias(alias, &next_best)
		} else {
			None
		};

		let found = found.or_else(|| {
			trace!(alias, fallback = %self.universal_fallback, "trying universal fallback locale");
			store.lookup_path_for_alias(alias, &self.universal_fallback)
		});

		match found {
			Some(path) => {
				let cache = self.manager.cache();
				cache.record_alias(&next_best, &path, alias);
				cache.clear_no_path(&locale, alias);
				debug!(alias, path = %path, requested = %locale, cached_as = %next_best, "alias resolved through cascade");
				path
			}
			None => resolved,
		}
	}

	/// Outbound alias for the system `path`.
	///
	/// Only detail pages consult the cascade; every other path is a plain
	/// lookup in the requested locale.
	pub fn resolve_outbound_path(&self, path: &str, locale: Option<&LocaleCode>) -> String {
		let aliased = self.manager.alias_by_path(path, locale);

		if !self.detail_pages.matches(&aliased) {
			return aliased;
		}

		self.alias_along_cascade(&aliased, locale)
	}

	/// First alias of `path` along the cascade for `locale`, or `path`.
	pub fn alias_along_cascade(&self, path: &str, locale: Option<&LocaleCode>) -> String {
		let cascade = self.sequencer.cascade_for(locale);

		for candidate in &cascade {
			let alias = self.manager.alias_by_path(path, Some(candidate));
			if alias != path {
				trace!(path, alias = %alias, locale = %candidate, "alias found along cascade");
				return alias;
			}
		}

		path.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	use cascade_common_locale::StaticLocaleRegistry;

	use crate::cache::AliasLookupCache;
	use crate::store::{AliasStore, InMemoryAliasStore};

	/// Counts store calls per direction.
	#[derive(Default)]
	struct CountingStore {
		inner: InMemoryAliasStore,
		path_lookups: AtomicUsize,
		alias_lookups: AtomicUsize,
	}

	impl AliasStore for CountingStore {
		fn lookup_path_for_alias(&self, alias: &str, locale: &LocaleCode) -> Option<String> {
			self.path_lookups.fetch_add(1, Ordering::SeqCst);
			self.inner.lookup_path_for_alias(alias, locale)
		}

		fn lookup_alias_for_path(&self, path: &str, locale: &LocaleCode) -> Option<String> {
			self.alias_lookups.fetch_add(1, Ordering::SeqCst);
			self.inner.lookup_alias_for_path(path, locale)
		}
	}

	struct Fixture {
		resolver: AliasResolver,
		store: Arc<CountingStore>,
		registry: Arc<StaticLocaleRegistry>,
	}

	fn fixture(known: &[&str]) -> Fixture {
		let store = Arc::new(CountingStore::default());
		let registry = Arc::new(StaticLocaleRegistry::new(
			"en".into(),
			known.iter().map(|code| LocaleCode::from(*code)),
		));
		let manager = AliasManager::new(
			store.clone(),
			registry.clone(),
			Arc::new(AliasLookupCache::new()),
		);
		let resolver = AliasResolver::new(
			manager,
			FallbackSequencer::new(registry.clone()),
			"en".into(),
			DetailPagePattern::from_prefixes(["node", "taxonomy/term"]).unwrap(),
		);
		Fixture {
			resolver,
			store,
			registry,
		}
	}

	#[test]
	fn test_exact_locale_hit() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/a-propos", "/node/5", "fr-ca");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_alias_to_path("/a-propos", Some(&fr_ca)), "/node/5");
		assert_eq!(f.store.path_lookups.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_falls_back_to_next_best_locale() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("about-us-fr", "/node/5", "fr");

		let fr_ca = LocaleCode::from("fr-ca");
		let fr = LocaleCode::from("fr");
		assert_eq!(f.resolver.resolve_alias_to_path("about-us-fr", Some(&fr_ca)), "/node/5");

		let cache = f.resolver.manager().cache();
		assert_eq!(cache.cached_alias(&fr, "/node/5").as_deref(), Some("about-us-fr"));
		assert!(cache.cached_alias(&fr_ca, "/node/5").is_none());
		assert!(!cache.has_no_path(&fr_ca, "about-us-fr"));
	}

	#[test]
	fn test_universal_fallback_cached_under_next_best() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/about-us", "/node/5", "en");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_alias_to_path("/about-us", Some(&fr_ca)), "/node/5");

		let cache = f.resolver.manager().cache();
		assert_eq!(
			cache.cached_alias(&"fr".into(), "/node/5").as_deref(),
			Some("/about-us")
		);
		assert!(cache.cached_alias(&"en".into(), "/node/5").is_none());
		assert_eq!(f.store.path_lookups.load(Ordering::SeqCst), 3);
	}

	#[test]
	fn test_universal_fallback_without_truncation() {
		let f = fixture(&["de"]);
		f.store.inner.insert("/about-us", "/node/5", "en");

		let de = LocaleCode::from("de");
		assert_eq!(f.resolver.resolve_alias_to_path("/about-us", Some(&de)), "/node/5");
		// No next-best retry: exact lookup plus the universal fallback.
		assert_eq!(f.store.path_lookups.load(Ordering::SeqCst), 2);
		assert_eq!(
			f.resolver.manager().cache().cached_alias(&de, "/node/5").as_deref(),
			Some("/about-us")
		);
	}

	#[test]
	fn test_total_miss_returns_input() {
		let f = fixture(&["fr"]);

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_alias_to_path("/nowhere", Some(&fr_ca)), "/nowhere");
		assert_eq!(f.store.path_lookups.load(Ordering::SeqCst), 3);
		assert!(f.resolver.manager().cache().has_no_path(&fr_ca, "/nowhere"));
	}

	#[test]
	fn test_defaults_to_current_request_locale() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("about-us-fr", "/node/5", "fr");
		f.registry.set_current_locale("fr-ca".into());

		assert_eq!(f.resolver.resolve_alias_to_path("about-us-fr", None), "/node/5");
	}

	#[test]
	fn test_outbound_exact_alias() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/a-propos-ca", "/node/5", "fr-ca");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_outbound_path("/node/5", Some(&fr_ca)), "/a-propos-ca");
	}

	#[test]
	fn test_outbound_walks_full_cascade() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/about-us", "/node/5", "en");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_outbound_path("/node/5", Some(&fr_ca)), "/about-us");
	}

	#[test]
	fn test_outbound_language_neutral_alias() {
		let f = fixture(&["fr"]);
		f.store
			.inner
			.insert("/term/news", "/taxonomy/term/3", LocaleCode::unspecified());

		assert_eq!(
			f.resolver.resolve_outbound_path("/taxonomy/term/3", Some(&"de".into())),
			"/term/news"
		);
	}

	#[test]
	fn test_outbound_detail_page_with_leading_segment() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/fr/a-propos", "/fr/node/5", "fr");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(
			f.resolver.resolve_outbound_path("/fr/node/5", Some(&fr_ca)),
			"/fr/a-propos"
		);
	}

	#[test]
	fn test_outbound_detail_page_without_alias_unchanged() {
		let f = fixture(&["fr"]);
		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_outbound_path("/node/7", Some(&fr_ca)), "/node/7");
	}

	#[test]
	fn test_outbound_non_detail_path_skips_cascade() {
		let f = fixture(&["fr"]);
		f.store.inner.insert("/team", "/user/5", "en");

		let fr_ca = LocaleCode::from("fr-ca");
		assert_eq!(f.resolver.resolve_outbound_path("/user/5", Some(&fr_ca)), "/user/5");
		assert_eq!(f.store.alias_lookups.load(Ordering::SeqCst), 1);
	}
}
