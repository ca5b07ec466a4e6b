// SPDX-License-Identifier: PMPL-1.0-or-later

//! mailcheck-translate: localisation of SPF/DKIM/DMARC scan diagnostics.
//!
//! The mail-check scanner reports its findings as English sentences, often
//! with runtime data (domains, record excerpts) spliced in. This crate turns
//! those into another language without losing the embedded data.
//!
//! PARTS:
//! 1. **i18n**: the placeholder-aware template matcher, the per-language
//!    catalogs, and the scan-result translator built on them.
//! 2. **types**: the scan result records as the scanner stores them.
//! 3. **report**: loading, saving and printing scan results for the CLI.

pub mod diagnostics;
pub mod i18n;
pub mod report;
pub mod types;
