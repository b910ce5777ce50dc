// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Alias storage capability.

use std::collections::HashMap;
use std::sync::Arc;

use cascade_common_locale::LocaleCode;
use parking_lot::RwLock;

/// Backing store of path aliases, keyed by locale.
///
/// Implementations perform the (potentially expensive) storage query; caching
/// is layered on top by [`AliasManager`](crate::AliasManager).
pub trait AliasStore: Send + Sync {
	/// System path for `alias` under `locale`.
	fn lookup_path_for_alias(&self, alias: &str, locale: &LocaleCode) -> Option<String>;

	/// Alias for the system `path` under `locale`.
	fn lookup_alias_for_path(&self, path: &str, locale: &LocaleCode) -> Option<String>;
}

impl<T: AliasStore + ?Sized> AliasStore for Arc<T> {
	fn lookup_path_for_alias(&self, alias: &str, locale: &LocaleCode) -> Option<String> {
		(**self).lookup_path_for_alias(alias, locale)
	}

	fn lookup_alias_for_path(&self, path: &str, locale: &LocaleCode) -> Option<String> {
		(**self).lookup_alias_for_path(path, locale)
	}
}

#[derive(Debug, Default)]
struct AliasTables {
	by_alias: HashMap<(LocaleCode, String), String>,
	by_path: HashMap<(LocaleCode, String), String>,
}

/// In-memory alias store.
///
/// Aliases saved under the unspecified locale are language neutral: they
/// answer lookups for any locale that has no alias of its own.
#[derive(Debug, Default)]
pub struct InMemoryAliasStore {
	tables: RwLock<AliasTables>,
}

impl InMemoryAliasStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Save `alias` for `path` under `locale`, replacing any previous alias
	/// for that path in that locale.
	pub fn insert(&self, alias: impl Into<String>, path: impl Into<String>, locale: impl Into<LocaleCode>) {
		let (alias, path, locale) = (alias.into(), path.into(), locale.into());
		let mut tables = self.tables.write();

		if let Some(previous) = tables
			.by_path
			.insert((locale.clone(), path.clone()), alias.clone())
		{
			tables.by_alias.remove(&(locale.clone(), previous));
		}
		tables.by_alias.insert((locale, alias), path);
	}

	/// Remove the alias for `path` under `locale`. Returns the removed alias.
	pub fn remove(&self, path: &str, locale: &LocaleCode) -> Option<String> {
		let mut tables = self.tables.write();
		let alias = tables.by_path.remove(&(locale.clone(), path.to_string()))?;
		tables.by_alias.remove(&(locale.clone(), alias.clone()));
		Some(alias)
	}

	pub fn len(&self) -> usize {
		self.tables.read().by_path.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lookup(
		table: &HashMap<(LocaleCode, String), String>,
		key: &str,
		locale: &LocaleCode,
	) -> Option<String> {
		if let Some(value) = table.get(&(locale.clone(), key.to_string())) {
			return Some(value.clone());
		}
		if locale.is_unspecified() {
			return None;
		}
		table
			.get(&(LocaleCode::unspecified(), key.to_string()))
			.cloned()
	}
}

impl AliasStore for InMemoryAliasStore {
	fn lookup_path_for_alias(&self, alias: &str, locale: &LocaleCode) -> Option<String> {
		Self::lookup(&self.tables.read().by_alias, alias, locale)
	}

	fn lookup_alias_for_path(&self, path: &str, locale: &LocaleCode) -> Option<String> {
		Self::lookup(&self.tables.read().by_path, path, locale)
	}
}
