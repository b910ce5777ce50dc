// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale registry capability.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::code::LocaleCode;

/// Read-only view of the locales configured by the host.
pub trait LocaleRegistry: Send + Sync {
	/// Whether `code` is a configured locale.
	fn is_known_locale(&self, code: &LocaleCode) -> bool;

	/// The site default locale.
	fn default_locale(&self) -> LocaleCode;

	/// The locale negotiated for the request being handled.
	fn current_request_locale(&self) -> LocaleCode;
}

impl<T: LocaleRegistry + ?Sized> LocaleRegistry for Arc<T> {
	fn is_known_locale(&self, code: &LocaleCode) -> bool {
		(**self).is_known_locale(code)
	}

	fn default_locale(&self) -> LocaleCode {
		(**self).default_locale()
	}

	fn current_request_locale(&self) -> LocaleCode {
		(**self).current_request_locale()
	}
}

/// Registry backed by a fixed set of known locales.
///
/// The current request locale starts as the default and can be switched by
/// the host's language negotiation.
#[derive(Debug)]
pub struct StaticLocaleRegistry {
	known: HashSet<LocaleCode>,
	default_locale: LocaleCode,
	current: RwLock<LocaleCode>,
}

impl StaticLocaleRegistry {
	/// The default locale is always registered, even if absent from `known`.
	pub fn new(default_locale: LocaleCode, known: impl IntoIterator<Item = LocaleCode>) -> Self {
		let mut known: HashSet<LocaleCode> = known.into_iter().collect();
		known.insert(default_locale.clone());

		Self {
			known,
			current: RwLock::new(default_locale.clone()),
			default_locale,
		}
	}

	pub fn with_current_locale(self, locale: LocaleCode) -> Self {
		self.set_current_locale(locale);
		self
	}

	pub fn set_current_locale(&self, locale: LocaleCode) {
		tracing::trace!(locale = %locale, "switching current request locale");
		*self.current.write() = locale;
	}

	/// Known locales in sorted order.
	pub fn known_locales(&self) -> Vec<LocaleCode> {
		let mut locales: Vec<_> = self.known.iter().cloned().collect();
		locales.sort();
		locales
	}
}

impl LocaleRegistry for StaticLocaleRegistry {
	fn is_known_locale(&self, code: &LocaleCode) -> bool {
		self.known.contains(code)
	}

	fn default_locale(&self) -> LocaleCode {
		self.default_locale.clone()
	}

	fn current_request_locale(&self) -> LocaleCode {
		self.current.read().clone()
	}
}
