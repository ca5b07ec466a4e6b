// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog self-diagnostics for the `check` subcommand.

use crate::i18n::{catalog_for, rules_for, Lang};
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::HashSet;
use std::env;

pub const LANG_ENV: &str = "MAILCHECK_LANG";

pub fn run_catalog_diagnostics() -> Result<()> {
    println!("mailcheck-translate self-diagnostics");

    let mut checks = vec![Diagnostic::ok(
        "version".to_string(),
        format!("mailcheck-translate {}", env!("CARGO_PKG_VERSION")),
    )];
    for lang in Lang::all() {
        checks.extend(check_catalog(*lang));
    }
    checks.push(check_default_language());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: String, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: String, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: String, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: String, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_catalog(lang: Lang) -> Vec<Diagnostic> {
    let label = format!("{} catalog", lang.code());
    if lang.is_source() {
        return vec![Diagnostic::ok(
            label,
            "source language, messages pass through".to_string(),
        )];
    }

    let mut checks = Vec::new();
    match catalog_for(lang) {
        Ok(catalog) => checks.push(Diagnostic::ok(
            label.clone(),
            format!("{} rules compiled", catalog.len()),
        )),
        Err(err) => checks.push(Diagnostic::error(label.clone(), err.to_string())),
    }

    let duplicates = duplicate_sources(rules_for(lang));
    if !duplicates.is_empty() {
        checks.push(Diagnostic::warning(
            label,
            format!(
                "{} duplicate source template(s), later copies never match: {:?}",
                duplicates.len(),
                duplicates
            ),
        ));
    }
    checks
}

fn duplicate_sources(rules: &[(&str, &str)]) -> Vec<usize> {
    let mut seen = HashSet::new();
    rules
        .iter()
        .enumerate()
        .filter(|(_, (source, _))| !seen.insert(*source))
        .map(|(index, _)| index)
        .collect()
}

fn check_default_language() -> Diagnostic {
    let label = "default language".to_string();
    match env::var(LANG_ENV) {
        Ok(value) if !value.trim().is_empty() => match value.parse::<Lang>() {
            Ok(lang) => Diagnostic::ok(label, format!("{} (from {})", lang, LANG_ENV)),
            Err(err) => Diagnostic::error(label, format!("{} in {}", err, LANG_ENV)),
        },
        _ => Diagnostic::ok(
            label,
            format!("{} (set {} to override)", Lang::default(), LANG_ENV),
        ),
    }
}
