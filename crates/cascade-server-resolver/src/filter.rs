// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query-time language filtering.
//!
//! Exposes the cascade as an inclusion set ("locale IN (...)") for the host
//! query layer. Query execution stays with the host.

use std::fmt;

use cascade_common_locale::{CascadeSequence, FallbackSequencer, LocaleCode};
use serde::Serialize;

/// Membership set of locales a record may be in to be included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionPredicate {
	locales: CascadeSequence,
}

impl InclusionPredicate {
	pub fn contains(&self, locale: &LocaleCode) -> bool {
		self.locales.contains(locale)
	}

	/// Membership test for raw locale strings coming from storage.
	pub fn matches(&self, locale: &str) -> bool {
		self.locales.iter().any(|candidate| candidate == locale)
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}

	/// Members in cascade order.
	pub fn iter(&self) -> std::slice::Iter<'_, LocaleCode> {
		self.locales.iter()
	}

	pub fn into_locales(self) -> Vec<LocaleCode> {
		self.locales.into_vec()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionOperator {
	#[serde(rename = "IN")]
	In,
}

impl fmt::Display for ConditionOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConditionOperator::In => f.write_str("IN"),
		}
	}
}

/// A field condition ready to be attached to the host's query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InclusionCondition {
	pub field: String,
	pub operator: ConditionOperator,
	pub values: Vec<LocaleCode>,
}

/// Builds inclusion filters over a locale column.
#[derive(Debug, Clone)]
pub struct SequenceFilter {
	sequencer: FallbackSequencer,
	field: String,
}

impl SequenceFilter {
	pub const DEFAULT_FIELD: &'static str = "langcode";

	pub fn new(sequencer: FallbackSequencer) -> Self {
		Self {
			sequencer,
			field: Self::DEFAULT_FIELD.to_string(),
		}
	}

	pub fn with_field(mut self, field: impl Into<String>) -> Self {
		self.field = field.into();
		self
	}

	pub fn field(&self) -> &str {
		&self.field
	}

	/// The full cascade for `current_locale` as a membership set.
	pub fn build_inclusion_predicate(&self, current_locale: &LocaleCode) -> InclusionPredicate {
		InclusionPredicate {
			locales: self
				.sequencer
				.build_cascade(current_locale, &self.sequencer.registry().default_locale()),
		}
	}

	pub fn condition(&self, current_locale: &LocaleCode) -> InclusionCondition {
		InclusionCondition {
			field: self.field.clone(),
			operator: ConditionOperator::In,
			values: self.build_inclusion_predicate(current_locale).into_locales(),
		}
	}

	pub fn condition_for_current_request(&self) -> InclusionCondition {
		let current = self.sequencer.registry().current_request_locale();
		self.condition(&current)
	}
}
