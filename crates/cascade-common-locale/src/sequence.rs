// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::Serialize;

use crate::code::LocaleCode;

/// Ordered, duplicate-free list of locales to try, most specific first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CascadeSequence(Vec<LocaleCode>);

impl CascadeSequence {
	/// Upper bound on the number of candidates in a cascade.
	pub const MAX_LEN: usize = 4;

	pub(crate) fn new() -> Self {
		Self(Vec::with_capacity(Self::MAX_LEN))
	}

	/// Append `locale` unless it is already present. Returns whether it was added.
	pub(crate) fn push_unique(&mut self, locale: LocaleCode) -> bool {
		if self.contains(&locale) {
			return false;
		}
		self.0.push(locale);
		true
	}

	pub fn contains(&self, locale: &LocaleCode) -> bool {
		self.0.contains(locale)
	}

	/// The locale the cascade was built for.
	pub fn requested(&self) -> Option<&LocaleCode> {
		self.0.first()
	}

	pub fn last(&self) -> Option<&LocaleCode> {
		self.0.last()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, LocaleCode> {
		self.0.iter()
	}

	pub fn into_vec(self) -> Vec<LocaleCode> {
		self.0
	}
}

impl fmt::Display for CascadeSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, locale) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" > ")?;
			}
			write!(f, "{locale}")?;
		}
		Ok(())
	}
}

impl IntoIterator for CascadeSequence {
	type Item = LocaleCode;
	type IntoIter = std::vec::IntoIter<LocaleCode>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a CascadeSequence {
	type Item = &'a LocaleCode;
	type IntoIter = std::slice::Iter<'a, LocaleCode>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
