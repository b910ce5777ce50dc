// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.

use cascade_common_locale::{LocaleCode, LocaleError, StaticLocaleRegistry};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_locale() -> LocaleCode {
	LocaleCode::from("en")
}

/// Locale of the original content, tried when the next-best locale has no alias.
fn default_universal_fallback() -> LocaleCode {
	LocaleCode::from("en")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocalesConfigLayer {
	pub default_locale: Option<LocaleCode>,
	pub known: Option<Vec<LocaleCode>>,
	pub universal_fallback: Option<LocaleCode>,
}

impl LocalesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.known.is_some() {
			self.known = other.known;
		}
		if other.universal_fallback.is_some() {
			self.universal_fallback = other.universal_fallback;
		}
	}

	pub fn finalize(self) -> LocalesConfig {
		let default_locale = self.default_locale.unwrap_or_else(default_locale);

		let mut known = self.known.unwrap_or_default();
		if known.is_empty() {
			known.push(default_locale.clone());
		}

		LocalesConfig {
			default_locale,
			known,
			universal_fallback: self
				.universal_fallback
				.unwrap_or_else(default_universal_fallback),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalesConfig {
	pub default_locale: LocaleCode,
	pub known: Vec<LocaleCode>,
	pub universal_fallback: LocaleCode,
}

impl Default for LocalesConfig {
	fn default() -> Self {
		LocalesConfigLayer::default().finalize()
	}
}

impl LocalesConfig {
	/// Build a registry over the configured locales.
	pub fn registry(&self) -> StaticLocaleRegistry {
		StaticLocaleRegistry::new(self.default_locale.clone(), self.known.iter().cloned())
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		self
			.default_locale
			.validate()
			.map_err(invalid_locale("locales.default_locale"))?;
		self
			.universal_fallback
			.validate()
			.map_err(invalid_locale("locales.universal_fallback"))?;
		for code in &self.known {
			code.validate().map_err(invalid_locale("locales.known"))?;
		}

		if !self.known.contains(&self.default_locale) {
			return Err(ConfigError::Validation(format!(
				"default locale '{}' is not listed in locales.known",
				self.default_locale
			)));
		}

		Ok(())
	}
}

fn invalid_locale(key: &'static str) -> impl FnOnce(LocaleError) -> ConfigError {
	move |source| ConfigError::InvalidLocale {
		key: key.to_string(),
		source,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use cascade_common_locale::LocaleRegistry;

	#[test]
	fn test_default_values() {
		let config = LocalesConfig::default();
		assert_eq!(config.default_locale, "en");
		assert_eq!(config.known, vec![LocaleCode::from("en")]);
		assert_eq!(config.universal_fallback, "en");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_finalize_keeps_explicit_known_list() {
		let layer = LocalesConfigLayer {
			default_locale: Some("fr".into()),
			known: Some(vec!["fr".into(), "fr-ca".into()]),
			universal_fallback: None,
		};
		let config = layer.finalize();
		assert_eq!(config.default_locale, "fr");
		assert_eq!(config.known.len(), 2);
		assert_eq!(config.universal_fallback, "en");
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = LocalesConfigLayer {
			default_locale: Some("en".into()),
			known: Some(vec!["en".into()]),
			universal_fallback: None,
		};
		base.merge(LocalesConfigLayer {
			known: Some(vec!["en".into(), "fr".into()]),
			..Default::default()
		});
		assert_eq!(base.default_locale, Some("en".into()));
		assert_eq!(base.known.as_ref().map(Vec::len), Some(2));
	}

	#[test]
	fn test_validate_rejects_unlisted_default() {
		let config = LocalesConfig {
			default_locale: "de".into(),
			known: vec!["en".into()],
			universal_fallback: "en".into(),
		};
		let err = config.validate().unwrap_err();
		assert!(err.to_string().contains("not listed"));
	}

	#[test]
	fn test_validate_rejects_malformed_code() {
		let config = LocalesConfig {
			default_locale: "en".into(),
			known: vec!["en".into(), "fr--ca".into()],
			universal_fallback: "en".into(),
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::InvalidLocale { ref key, .. }) if key == "locales.known"
		));
	}

	#[test]
	fn test_registry_from_config() {
		let config = LocalesConfig {
			default_locale: "en".into(),
			known: vec!["en".into(), "fr".into()],
			universal_fallback: "en".into(),
		};
		let registry = config.registry();
		assert!(registry.is_known_locale(&"fr".into()));
		assert!(!registry.is_known_locale(&"fr-ca".into()));
		assert_eq!(registry.default_locale(), "en");
	}

	#[test]
	fn test_deserialize_layer() {
		let toml_str = r#"
default_locale = "en"
known = ["en", "fr", "zh-hant"]
"#;
		let layer: LocalesConfigLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.known.unwrap().len(), 3);
		assert!(layer.universal_fallback.is_none());
	}
}
