// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation of whole scan results.
//!
//! Builds a fresh [`ScanResult`] with every error and warning rendered in the
//! requested language. The input is only borrowed, and any failure aborts
//! the whole translation so callers never see a half-translated result.

use super::catalog::{catalog_for, Lang};
use super::error::Result;
use super::template::{translate, Catalog, Fallback};
use crate::types::{DkimScanResult, DmarcScanResult, DomainScanResult, ScanResult, SpfScanResult};

/// Translate a single message into `lang`.
///
/// The source language is the identity and never consults a catalog.
pub fn translate_message(message: &str, lang: Lang, fallback: Option<Fallback>) -> Result<String> {
    if lang.is_source() {
        return Ok(message.to_string());
    }
    translate(message, catalog_for(lang)?, fallback)
}

/// Translate every message of `result` into `lang`, returning a new result.
pub fn translate_scan_result(
    result: &ScanResult,
    lang: Lang,
    fallback: Option<Fallback>,
) -> Result<ScanResult> {
    if lang.is_source() {
        return Ok(result.clone());
    }

    let translator = Translator {
        catalog: catalog_for(lang)?,
        fallback,
    };

    Ok(ScanResult {
        domain: result
            .domain
            .as_ref()
            .map(|domain| translator.domain(domain))
            .transpose()?,
        dkim: result
            .dkim
            .as_ref()
            .map(|dkim| translator.dkim(dkim))
            .transpose()?,
        timestamp: result.timestamp,
        message_timestamp: result.message_timestamp,
    })
}

struct Translator<'a> {
    catalog: &'a Catalog,
    fallback: Option<Fallback<'a>>,
}

impl Translator<'_> {
    fn messages(&self, messages: &[String]) -> Result<Vec<String>> {
        messages
            .iter()
            .map(|message| translate(message, self.catalog, self.fallback))
            .collect()
    }

    fn domain(&self, domain: &DomainScanResult) -> Result<DomainScanResult> {
        Ok(DomainScanResult {
            spf: domain.spf.as_ref().map(|spf| self.spf(spf)).transpose()?,
            dmarc: domain
                .dmarc
                .as_ref()
                .map(|dmarc| self.dmarc(dmarc))
                .transpose()?,
            domain: domain.domain.clone(),
            base_domain: domain.base_domain.clone(),
            warnings: self.messages(&domain.warnings)?,
        })
    }

    fn spf(&self, spf: &SpfScanResult) -> Result<SpfScanResult> {
        Ok(SpfScanResult {
            valid: spf.valid,
            record: spf.record.clone(),
            errors: self.messages(&spf.errors)?,
            warnings: self.messages(&spf.warnings)?,
        })
    }

    fn dmarc(&self, dmarc: &DmarcScanResult) -> Result<DmarcScanResult> {
        Ok(DmarcScanResult {
            valid: dmarc.valid,
            location: dmarc.location.clone(),
            tags: dmarc.tags.clone(),
            record: dmarc.record.clone(),
            errors: self.messages(&dmarc.errors)?,
            warnings: self.messages(&dmarc.warnings)?,
        })
    }

    fn dkim(&self, dkim: &DkimScanResult) -> Result<DkimScanResult> {
        Ok(DkimScanResult {
            valid: dkim.valid,
            errors: self.messages(&dkim.errors)?,
            warnings: self.messages(&dkim.warnings)?,
        })
    }
}
