// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localisation of mail-check diagnostics.
//!
//! The scanner emits English messages, many of which embed runtime data
//! (domain names, record excerpts, timeouts). Translation is template
//! lookup: each catalog rule pairs an English template with variable slots
//! and a localised template with the same slots, and the first rule whose
//! template matches the whole message wins.
//!
//! ## Supported languages
//!
//! | Code  | Language | Catalog              |
//! |-------|----------|----------------------|
//! | en_US | English  | none (identity)      |
//! | pl_PL | Polish   | current + legacy     |
//!
//! ## Design
//!
//! Catalogs are embedded static tables, validated and compiled to regexes on
//! first use and shared read-only afterwards. A message with no matching
//! rule is an error unless the caller passes a [`Fallback`], e.g.
//! [`keep_original`] to degrade to English.
//!
//! ```
//! use mailcheck_translate::i18n::{translate_message, Lang};
//! let pl = translate_message("No DKIM signature found", Lang::PlPl, None).unwrap();
//! assert!(pl.starts_with("Nie znaleziono podpisu DKIM."));
//! ```

mod catalog;
mod error;
mod scan;
mod template;

pub use catalog::{catalog_for, rules_for, Lang};
pub use error::{Result, TranslateError};
pub use scan::{translate_message, translate_scan_result};
pub use template::{keep_original, translate, Catalog, Fallback, Template, IGNORED, PLACEHOLDER};
