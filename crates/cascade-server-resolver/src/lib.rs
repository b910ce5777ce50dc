// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language cascade resolution for a content platform.
//!
//! When content is not available in the exact locale of a request, this crate
//! decides which variant to serve instead:
//!
//! - [`AliasResolver`]: inbound alias to path, and outbound path to alias,
//!   through the fallback cascade
//! - [`TranslationSelector`]: next-best translation of a record
//! - [`SequenceFilter`]: "locale IN (cascade)" filters for the query layer
//! - [`RequestPathCondition`]: page pattern matching against cascade aliases
//!
//! All of them are total: when nothing better exists the input comes back
//! unchanged.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_common_config::CascadeConfig;
//! use cascade_common_locale::LocaleCode;
//! use cascade_server_resolver::{CascadeServices, InMemoryAliasStore};
//!
//! let mut config = CascadeConfig::default();
//! config.locales.known.push("fr".into());
//!
//! let store = Arc::new(InMemoryAliasStore::new());
//! store.insert("/a-propos", "/node/5", "fr");
//!
//! let services = CascadeServices::from_config(&config, store).unwrap();
//! let path = services
//! 	.aliases
//! 	.resolve_alias_to_path("/a-propos", Some(&LocaleCode::from("fr-ca")));
//! assert_eq!(path, "/node/5");
//! ```

mod alias;
mod cache;
mod condition;
mod detail_page;
mod error;
mod filter;
mod manager;
mod path_matcher;
mod services;
mod store;
mod translation;

pub use alias::AliasResolver;
pub use cache::AliasLookupCache;
pub use condition::RequestPathCondition;
pub use detail_page::DetailPagePattern;
pub use error::PatternError;
pub use filter::{ConditionOperator, InclusionCondition, InclusionPredicate, SequenceFilter};
pub use manager::AliasManager;
pub use path_matcher::{PagePatterns, PathMatcher};
pub use services::CascadeServices;
pub use store::{AliasStore, InMemoryAliasStore};
pub use translation::{TranslatableRecord, TranslationSelector};
