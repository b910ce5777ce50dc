// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation selection for translatable records.

use std::fmt;

use cascade_common_locale::{FallbackSequencer, LocaleCode};
use tracing::debug;

/// A record available in several locale variants.
pub trait TranslatableRecord: Sized {
	type Error: fmt::Display;

	/// Locale of the variant this value represents.
	fn resolved_locale(&self) -> &LocaleCode;

	/// Locale of the untranslated source variant.
	fn original_locale(&self) -> &LocaleCode;

	/// Fetch the variant for `locale`. `Ok(None)` means no such translation.
	fn variant(&self, locale: &LocaleCode) -> Result<Option<Self>, Self::Error>;
}

/// Swaps a source-language fallback for the next-best translation.
#[derive(Debug, Clone)]
pub struct TranslationSelector {
	sequencer: FallbackSequencer,
}

impl TranslationSelector {
	pub fn new(sequencer: FallbackSequencer) -> Self {
		Self { sequencer }
	}

	/// Pick the variant of `record` to expose for `current_locale`.
	///
	/// Only a record the host resolved to its original locale, while a
	/// different locale was requested, is considered for substitution. A
	/// missing or failing variant leaves the record as it was.
	pub fn select_translation<R: TranslatableRecord>(&self, record: R, current_locale: &LocaleCode) -> R {
		let resolved = record.resolved_locale();
		if resolved == current_locale || resolved != record.original_locale() {
			return record;
		}

		let next_best = self.sequencer.next_best(current_locale);
		if &next_best == current_locale {
			return record;
		}

		match record.variant(&next_best) {
			Ok(Some(translation)) => {
				debug!(requested = %current_locale, selected = %next_best, "substituted next-best translation");
				translation
			}
			Ok(None) => {
				debug!(requested = %current_locale, candidate = %next_best, "no next-best translation");
				record
			}
			Err(e) => {
				debug!(requested = %current_locale, candidate = %next_best, error = %e, "translation lookup failed, keeping original");
				record
			}
		}
	}

	/// [`select_translation`](Self::select_translation) for the current request locale.
	pub fn select_for_current_request<R: TranslatableRecord>(&self, record: R) -> R {
		let current = self.sequencer.registry().current_request_locale();
		self.select_translation(record, &current)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::sync::Arc;

	use cascade_common_locale::StaticLocaleRegistry;

	#[derive(Debug, Clone, PartialEq)]
	struct Page {
		locale: LocaleCode,
		original: LocaleCode,
		title: String,
		translations: HashMap<LocaleCode, String>,
		broken: bool,
	}

	impl Page {
		fn new(original: &str, title: &str) -> Self {
			let mut translations = HashMap::new();
			translations.insert(LocaleCode::from(original), title.to_string());
			Self {
				locale: original.into(),
				original: original.into(),
				title: title.to_string(),
				translations,
				broken: false,
			}
		}

		fn with_translation(mut self, locale: &str, title: &str) -> Self {
			self.translations.insert(locale.into(), title.to_string());
			self
		}

		fn in_locale(&self, locale: &str) -> Self {
			let mut page = self.clone();
			page.locale = locale.into();
			page.title = self.translations[locale].clone();
			page
		}
	}

	impl TranslatableRecord for Page {
		type Error = String;

		fn resolved_locale(&self) -> &LocaleCode {
			&self.locale
		}

		fn original_locale(&self) -> &LocaleCode {
			&self.original
		}

		fn variant(&self, locale: &LocaleCode) -> Result<Option<Self>, Self::Error> {
			if self.broken {
				return Err("storage unavailable".to_string());
			}
			Ok(self
				.translations
				.get(locale)
				.map(|_| self.in_locale(locale.as_str())))
		}
	}

	fn selector() -> TranslationSelector {
		let registry = StaticLocaleRegistry::new("en".into(), ["fr".into(), "zh-hant".into()])
			.with_current_locale("fr-ca".into());
		TranslationSelector::new(FallbackSequencer::new(Arc::new(registry)))
	}

	#[test]
	fn test_substitutes_next_best_translation() {
		let page = Page::new("en", "About").with_translation("fr", "À propos");
		let selected = selector().select_translation(page, &"fr-ca".into());
		assert_eq!(selected.locale, "fr");
		assert_eq!(selected.title, "À propos");
	}

	#[test]
	fn test_untouched_when_resolved_matches_current() {
		let page = Page::new("en", "About").with_translation("fr", "À propos");
		let page = page.in_locale("fr");
		let selected = selector().select_translation(page.clone(), &"fr".into());
		assert_eq!(selected, page);
	}

	#[test]
	fn test_untouched_when_resolved_is_deliberate_translation() {
		let page = Page::new("en", "About")
			.with_translation("zh-hant", "關於")
			.with_translation("fr", "À propos");
		let page = page.in_locale("zh-hant");
		let selected = selector().select_translation(page.clone(), &"fr-ca".into());
		assert_eq!(selected, page);
	}

	#[test]
	fn test_untouched_when_no_next_best() {
		let page = Page::new("en", "About").with_translation("de", "Über");
		let selected = selector().select_translation(page.clone(), &"de".into());
		assert_eq!(selected, page);
	}

	#[test]
	fn test_missing_variant_keeps_original() {
		let page = Page::new("en", "About");
		let selected = selector().select_translation(page.clone(), &"fr-ca".into());
		assert_eq!(selected, page);
	}

	#[test]
	fn test_failing_variant_is_absorbed() {
		let mut page = Page::new("en", "About").with_translation("fr", "À propos");
		page.broken = true;
		let selected = selector().select_translation(page.clone(), &"fr-ca".into());
		assert_eq!(selected, page);
	}

	#[test]
	fn test_select_for_current_request() {
		let page = Page::new("en", "About").with_translation("fr", "À propos");
		let selected = selector().select_for_current_request(page);
		assert_eq!(selected.title, "À propos");
	}
}
