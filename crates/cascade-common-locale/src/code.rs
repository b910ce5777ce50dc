// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale code value type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
	#[error("locale code is empty")]
	Empty,

	#[error("invalid segment '{segment}' in locale code '{code}'")]
	InvalidSegment { code: String, segment: String },
}

/// A hyphen-segmented locale identifier, most specific segment last
/// (e.g. `zh-hant-tw`).
///
/// Equality is exact and case-sensitive on the full code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
	/// Segment delimiter.
	pub const SEPARATOR: char = '-';

	/// Code of the sentinel meaning "no language applies".
	pub const UNSPECIFIED: &'static str = "und";

	/// Create a locale code without validation.
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	/// The sentinel unspecified locale.
	pub fn unspecified() -> Self {
		Self::new(Self::UNSPECIFIED)
	}

	/// Create a locale code, rejecting empty codes and malformed segments.
	///
	/// ```
	/// use cascade_common_locale::LocaleCode;
	///
	/// assert!(LocaleCode::parse("zh-hant-tw").is_ok());
	/// assert!(LocaleCode::parse("fr--ca").is_err());
	/// assert!(LocaleCode::parse("").is_err());
	/// ```
	pub fn parse(code: &str) -> Result<Self, LocaleError> {
		let locale = Self::new(code);
		locale.validate()?;
		Ok(locale)
	}

	/// Check that every segment is non-empty ASCII alphanumeric (underscores allowed).
	pub fn validate(&self) -> Result<(), LocaleError> {
		if self.0.is_empty() {
			return Err(LocaleError::Empty);
		}

		for segment in self.segments() {
			let valid = !segment.is_empty()
				&& segment
					.chars()
					.all(|c| c.is_ascii_alphanumeric() || c == '_');
			if !valid {
				return Err(LocaleError::InvalidSegment {
					code: self.0.clone(),
					segment: segment.to_string(),
				});
			}
		}

		Ok(())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_unspecified(&self) -> bool {
		self.0 == Self::UNSPECIFIED
	}

	/// Iterate over the hyphen-delimited segments.
	pub fn segments(&self) -> std::str::Split<'_, char> {
		self.0.split(Self::SEPARATOR)
	}

	/// The code with its last segment removed, if it has more than one.
	///
	/// This is purely syntactic; whether the result is a configured locale
	/// is for the registry to decide.
	pub fn parent(&self) -> Option<LocaleCode> {
		self
			.0
			.rsplit_once(Self::SEPARATOR)
			.map(|(head, _)| LocaleCode::new(head))
	}
}

impl fmt::Display for LocaleCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for LocaleCode {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for LocaleCode {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for LocaleCode {
	fn from(code: &str) -> Self {
		Self::new(code)
	}
}

impl From<String> for LocaleCode {
	fn from(code: String) -> Self {
		Self(code)
	}
}

impl PartialEq<str> for LocaleCode {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for LocaleCode {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
