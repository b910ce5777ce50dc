// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for language cascade resolution.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Validation of locale codes and path settings
//! - Consistent environment variable naming (`CASCADE_*`)
//! - Tracing subscriber setup driven by the logging section
//!
//! # Usage
//!
//! ```ignore
//! use cascade_common_config::load_config;
//!
//! let config = load_config()?;
//! let registry = config.locales.registry();
//! ```

pub mod error;
pub mod layer;
pub mod logging;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::CascadeConfigLayer;
pub use logging::{env_filter, init_tracing};
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved cascade configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeConfig {
	pub locales: LocalesConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`CASCADE_*`)
/// 2. Config file (`/etc/cascade/cascade.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<CascadeConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<CascadeConfig, ConfigError> {
	let mut merged = CascadeConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<CascadeConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<CascadeConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = CascadeConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: CascadeConfigLayer) -> Result<CascadeConfig, ConfigError> {
	let locales = layer.locales.unwrap_or_default().finalize();
	let paths = layer.paths.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	locales.validate()?;
	paths.validate()?;

	info!(
		default_locale = %locales.default_locale,
		known_locales = locales.known.len(),
		universal_fallback = %locales.universal_fallback,
		detail_page_prefixes = ?paths.detail_page_prefixes,
		"Cascade configuration loaded"
	);

	Ok(CascadeConfig {
		locales,
		paths,
		logging,
	})
}
