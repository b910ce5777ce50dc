// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use cascade_common_locale::LocaleCode;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::CascadeConfigLayer;
use crate::sections::{LocalesConfigLayer, LoggingConfigLayer, PathsConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<CascadeConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<CascadeConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(CascadeConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/cascade/cascade.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<CascadeConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(CascadeConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: CascadeConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: CASCADE_<FIELD>, lists are comma separated.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<CascadeConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(CascadeConfigLayer {
			locales: Some(load_locales_from_env()),
			paths: Some(load_paths_from_env()),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_list(name: &str) -> Option<Vec<String>> {
	env_var(name).map(|v| {
		v.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.map(str::to_string)
			.collect()
	})
}

fn load_locales_from_env() -> LocalesConfigLayer {
	LocalesConfigLayer {
		default_locale: env_var("CASCADE_DEFAULT_LOCALE").map(LocaleCode::from),
		known: env_list("CASCADE_LOCALES")
			.map(|codes| codes.into_iter().map(LocaleCode::from).collect()),
		universal_fallback: env_var("CASCADE_UNIVERSAL_FALLBACK").map(LocaleCode::from),
	}
}

fn load_paths_from_env() -> PathsConfigLayer {
	PathsConfigLayer {
		detail_page_prefixes: env_list("CASCADE_DETAIL_PAGE_PREFIXES"),
		front_page: env_var("CASCADE_FRONT_PAGE"),
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("CASCADE_LOG_LEVEL"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_missing_toml_file_is_empty_layer() {
		let source = TomlSource::new("/nonexistent/cascade.toml");
		let layer = source.load().unwrap();
		assert!(layer.locales.is_none());
		assert!(layer.paths.is_none());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[locales]
default_locale = "en"
known = ["en", "fr"]

[paths]
front_page = "/home"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let locales = layer.locales.unwrap();
		assert_eq!(locales.known, Some(vec!["en".into(), "fr".into()]));
		assert_eq!(layer.paths.unwrap().front_page.as_deref(), Some("/home"));
	}

	#[test]
	fn test_toml_source_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[locales\nknown = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_list_splits_and_trims() {
		std::env::set_var("CASCADE_TEST_ENV_LIST", " en, fr-ca ,,zh-hant ");
		assert_eq!(
			env_list("CASCADE_TEST_ENV_LIST"),
			Some(vec![
				"en".to_string(),
				"fr-ca".to_string(),
				"zh-hant".to_string()
			])
		);
		std::env::remove_var("CASCADE_TEST_ENV_LIST");
	}

	#[test]
	fn test_empty_env_var_is_unset() {
		std::env::set_var("CASCADE_TEST_EMPTY", "");
		assert!(env_var("CASCADE_TEST_EMPTY").is_none());
		std::env::remove_var("CASCADE_TEST_EMPTY");
	}
}
