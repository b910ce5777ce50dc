// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wiring of the cascade components from configuration.

use std::fmt;
use std::sync::Arc;

use cascade_common_config::CascadeConfig;
use cascade_common_locale::{FallbackSequencer, LocaleCode, LocaleRegistry};
use tracing::{debug, info};

use crate::alias::AliasResolver;
use crate::cache::AliasLookupCache;
use crate::condition::RequestPathCondition;
use crate::detail_page::DetailPagePattern;
use crate::error::PatternError;
use crate::filter::SequenceFilter;
use crate::manager::AliasManager;
use crate::path_matcher::PathMatcher;
use crate::store::AliasStore;
use crate::translation::TranslationSelector;

/// Every cascade consumer, sharing one registry, sequencer and alias cache.
///
/// The registry is supplied by the host. Hosts serving concurrent requests
/// give each request its own registry through
/// [`for_registry`](Self::for_registry), which keeps the store and the
/// alias cache shared.
#[derive(Clone)]
pub struct CascadeServices {
	pub registry: Arc<dyn LocaleRegistry>,
	pub sequencer: FallbackSequencer,
	pub cache: Arc<AliasLookupCache>,
	pub aliases: AliasResolver,
	pub translations: TranslationSelector,
	pub filter: SequenceFilter,
	pub path_matcher: PathMatcher,
	store: Arc<dyn AliasStore>,
	detail_pages: DetailPagePattern,
}

impl fmt::Debug for CascadeServices {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CascadeServices")
			.field("sequencer", &self.sequencer)
			.field("aliases", &self.aliases)
			.field("filter", &self.filter)
			.field("path_matcher", &self.path_matcher)
			.finish_non_exhaustive()
	}
}

impl CascadeServices {
	/// Wire every component around a host-provided registry and store.
	pub fn new(
		config: &CascadeConfig,
		registry: Arc<dyn LocaleRegistry>,
		store: Arc<dyn AliasStore>,
	) -> Result<Self, PatternError> {
		let detail_pages = DetailPagePattern::from_config(&config.paths)?;

		info!(
			default_locale = %registry.default_locale(),
			universal_fallback = %config.locales.universal_fallback,
			"language cascade services initialized"
		);

		Ok(Self::assemble(
			registry,
			store,
			Arc::new(AliasLookupCache::new()),
			config.locales.universal_fallback.clone(),
			detail_pages,
			SequenceFilter::DEFAULT_FIELD,
			PathMatcher::new(config.paths.front_page.clone()),
		))
	}

	/// [`new`](Self::new) with the registry built from the configured locales.
	pub fn from_config(config: &CascadeConfig, store: Arc<dyn AliasStore>) -> Result<Self, PatternError> {
		Self::new(config, Arc::new(config.locales.registry()), store)
	}

	/// The same services bound to another registry, typically one per request.
	///
	/// The alias store and the lookup cache are shared with `self`.
	pub fn for_registry(&self, registry: Arc<dyn LocaleRegistry>) -> Self {
		debug!(current_locale = %registry.current_request_locale(), "binding cascade services to registry");
		Self::assemble(
			registry,
			self.store.clone(),
			self.cache.clone(),
			self.aliases.universal_fallback().clone(),
			self.detail_pages.clone(),
			self.filter.field(),
			self.path_matcher.clone(),
		)
	}

	fn assemble(
		registry: Arc<dyn LocaleRegistry>,
		store: Arc<dyn AliasStore>,
		cache: Arc<AliasLookupCache>,
		universal_fallback: LocaleCode,
		detail_pages: DetailPagePattern,
		filter_field: &str,
		path_matcher: PathMatcher,
	) -> Self {
		let sequencer = FallbackSequencer::new(registry.clone());
		let manager = AliasManager::new(store.clone(), registry.clone(), cache.clone());
		let aliases = AliasResolver::new(
			manager,
			sequencer.clone(),
			universal_fallback,
			detail_pages.clone(),
		);

		Self {
			translations: TranslationSelector::new(sequencer.clone()),
			filter: SequenceFilter::new(sequencer.clone()).with_field(filter_field),
			path_matcher,
			registry,
			sequencer,
			cache,
			aliases,
			store,
			detail_pages,
		}
	}

	/// Build a request path condition for a newline-separated page list.
	pub fn request_path_condition(&self, pages: &str) -> Result<RequestPathCondition, PatternError> {
		RequestPathCondition::new(
			pages,
			&self.path_matcher,
			self.aliases.manager().clone(),
			self.sequencer.clone(),
			self.detail_pages.clone(),
		)
	}
}
