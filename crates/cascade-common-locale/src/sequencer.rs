// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fallback sequencing.
//!
//! Computes the next-best locale for a request and the full cascade of
//! locales to try, from most to least specific.

use std::fmt;
use std::sync::Arc;

use crate::code::LocaleCode;
use crate::registry::LocaleRegistry;
use crate::sequence::CascadeSequence;

/// Derives fallback candidates for a locale against a [`LocaleRegistry`].
#[derive(Clone)]
pub struct FallbackSequencer {
	registry: Arc<dyn LocaleRegistry>,
}

impl fmt::Debug for FallbackSequencer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FallbackSequencer")
			.field("default_locale", &self.registry.default_locale())
			.finish()
	}
}

impl FallbackSequencer {
	pub fn new(registry: Arc<dyn LocaleRegistry>) -> Self {
		Self { registry }
	}

	pub fn registry(&self) -> &dyn LocaleRegistry {
		self.registry.as_ref()
	}

	/// Drop the last segment of `locale` if the result is a known locale.
	///
	/// Only one level is removed: `zh-hant-tw` yields `zh-hant`, never `zh`,
	/// even when `zh-hant` is unknown and `zh` is.
	pub fn truncate_once(&self, locale: &LocaleCode) -> Option<LocaleCode> {
		let candidate = locale.parent()?;
		if self.registry.is_known_locale(&candidate) {
			Some(candidate)
		} else {
			tracing::trace!(locale = %locale, candidate = %candidate, "truncated locale is not registered");
			None
		}
	}

	/// The single one-step-less-specific locale, or `locale` itself.
	///
	/// ```
	/// use std::sync::Arc;
	/// use cascade_common_locale::{FallbackSequencer, LocaleCode, StaticLocaleRegistry};
	///
	/// let registry = StaticLocaleRegistry::new("en".into(), ["fr".into()]);
	/// let sequencer = FallbackSequencer::new(Arc::new(registry));
	///
	/// assert_eq!(sequencer.next_best(&"fr-ca".into()), "fr");
	/// assert_eq!(sequencer.next_best(&"de-at".into()), "de-at");
	/// ```
	pub fn next_best(&self, locale: &LocaleCode) -> LocaleCode {
		self
			.truncate_once(locale)
			.unwrap_or_else(|| locale.clone())
	}

	/// Build the cascade `locale, next_best(locale), default_locale, und`,
	/// skipping any candidate already present.
	pub fn build_cascade(&self, locale: &LocaleCode, default_locale: &LocaleCode) -> CascadeSequence {
		let mut sequence = CascadeSequence::new();
		sequence.push_unique(locale.clone());
		sequence.push_unique(self.next_best(locale));
		sequence.push_unique(default_locale.clone());
		sequence.push_unique(LocaleCode::unspecified());

		tracing::trace!(locale = %locale, cascade = %sequence, "built language cascade");
		sequence
	}

	/// `locale`, or the current request locale when none is given.
	pub fn effective_locale(&self, locale: Option<&LocaleCode>) -> LocaleCode {
		match locale {
			Some(locale) => locale.clone(),
			None => self.registry.current_request_locale(),
		}
	}

	/// [`next_best`](Self::next_best) for `locale` or the current request locale.
	pub fn next_best_for(&self, locale: Option<&LocaleCode>) -> LocaleCode {
		self.next_best(&self.effective_locale(locale))
	}

	/// Cascade for `locale` (or the current request locale) against the
	/// registry's default locale.
	pub fn cascade_for(&self, locale: Option<&LocaleCode>) -> CascadeSequence {
		let locale = self.effective_locale(locale);
		self.build_cascade(&locale, &self.registry.default_locale())
	}
}
