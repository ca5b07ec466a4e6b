// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scan result records produced by the mail-check scanner.
//!
//! These mirror the scanner's output one-to-one. The translator only ever
//! rewrites the `errors`/`warnings` lists; every other field is carried
//! through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SPF check outcome for a single domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpfScanResult {
    pub valid: bool,
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// DMARC check outcome for a single domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DmarcScanResult {
    pub valid: bool,
    /// Domain the DMARC record was actually found at (usually `_dmarc.<domain>`)
    #[serde(default)]
    pub location: Option<String>,
    /// Parsed tags, keyed by tag name (`p`, `rua`, `sp`, ...)
    #[serde(default)]
    pub tags: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Results of the DNS-based checks (SPF + DMARC) for one domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainScanResult {
    #[serde(default)]
    pub spf: Option<SpfScanResult>,
    #[serde(default)]
    pub dmarc: Option<DmarcScanResult>,
    pub domain: String,
    pub base_domain: String,
    /// Domain-level warnings not tied to SPF or DMARC (public suffix, TLD, ...)
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// DKIM signature check outcome for a received message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DkimScanResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Everything one scan produced. Either part may be absent when the
/// corresponding check was not performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub domain: Option<DomainScanResult>,
    #[serde(default)]
    pub dkim: Option<DkimScanResult>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message_timestamp: Option<DateTime<Utc>>,
}

impl ScanResult {
    /// Total number of free-text messages (errors and warnings) in the result.
    pub fn message_count(&self) -> usize {
        let domain = self.domain.as_ref().map_or(0, |d| {
            d.warnings.len()
                + d.spf.as_ref().map_or(0, |s| s.errors.len() + s.warnings.len())
                + d.dmarc.as_ref().map_or(0, |s| s.errors.len() + s.warnings.len())
        });
        let dkim = self
            .dkim
            .as_ref()
            .map_or(0, |d| d.errors.len() + d.warnings.len());
        domain + dkim
    }
}
