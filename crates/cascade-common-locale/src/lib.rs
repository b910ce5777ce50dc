// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale fallback sequencing.
//!
//! Given a requested locale and a registry of configured locales, this crate
//! works out which locales should be tried, in order, when content is not
//! available in the exact locale requested.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_common_locale::{FallbackSequencer, LocaleCode, StaticLocaleRegistry};
//!
//! let registry = StaticLocaleRegistry::new("en".into(), ["fr".into()]);
//! let sequencer = FallbackSequencer::new(Arc::new(registry));
//!
//! let cascade = sequencer.build_cascade(&"fr-ca".into(), &"en".into());
//! let codes: Vec<&str> = cascade.iter().map(LocaleCode::as_str).collect();
//! assert_eq!(codes, ["fr-ca", "fr", "en", "und"]);
//! ```

mod code;
mod registry;
mod sequence;
mod sequencer;

pub use code::{LocaleCode, LocaleError};
pub use registry::{LocaleRegistry, StaticLocaleRegistry};
pub use sequence::CascadeSequence;
pub use sequencer::FallbackSequencer;
