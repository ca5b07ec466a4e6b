// SPDX-License-Identifier: PMPL-1.0-or-later

//! mailcheck-translate: render mail-check scan diagnostics in another language
//!
//! Reads scan results stored by the SPF/DKIM/DMARC scanner and rewrites every
//! error and warning through the translation catalogs, keeping embedded
//! domains and record excerpts intact.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use mailcheck_translate::diagnostics::{self, LANG_ENV};
use mailcheck_translate::i18n::{self, keep_original, Fallback, Lang};
use mailcheck_translate::report::{self, ReportOutputFormat};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailcheck-translate")]
#[command(version)]
#[command(about = "Placeholder-aware localisation of SPF/DKIM/DMARC scan diagnostics")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a stored scan result (JSON or YAML)
    Translate {
        /// Scan result file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Target language (default: $MAILCHECK_LANG, then en_US)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Write the translated result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: from the output file extension, then json)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Keep messages with no known translation in English instead of failing
        #[arg(short, long)]
        keep_untranslated: bool,
    },

    /// Translate a single diagnostic message
    Message {
        /// Message text, exactly as the scanner produced it
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language (default: $MAILCHECK_LANG, then en_US)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Echo the message back unchanged if it has no known translation
        #[arg(short, long)]
        keep_untranslated: bool,
    },

    /// Validate the built-in translation catalogs
    Check,

    /// List supported languages
    Languages,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    #[value(name = "en_US", alias = "en")]
    EnUs,
    #[value(name = "pl_PL", alias = "pl")]
    PlPl,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::EnUs => Lang::EnUs,
            LangArg::PlPl => Lang::PlPl,
        }
    }
}

/// `--lang` wins, then `$MAILCHECK_LANG`, then the source language.
fn resolve_lang(arg: Option<LangArg>) -> Result<Lang> {
    if let Some(arg) = arg {
        return Ok(arg.into());
    }
    match env::var(LANG_ENV) {
        Ok(value) if !value.trim().is_empty() => value
            .parse::<Lang>()
            .with_context(|| format!("invalid {}", LANG_ENV)),
        _ => Ok(Lang::default()),
    }
}

fn fallback_for(keep_untranslated: bool) -> Option<Fallback<'static>> {
    if keep_untranslated {
        Some(&keep_original)
    } else {
        None
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            input,
            lang,
            output,
            format,
            keep_untranslated,
        } => {
            let lang = resolve_lang(lang)?;
            let scan = report::load_scan_result(&input)?;
            eprintln!(
                "Translating {} message(s) from {} into {}",
                scan.message_count(),
                input.display(),
                lang
            );

            let translated = i18n::translate_scan_result(&scan, lang, fallback_for(keep_untranslated))
                .with_context(|| format!("translating {}", input.display()))?;

            if let Some(output_path) = output {
                let format = format
                    .or_else(|| ReportOutputFormat::from_path(&output_path))
                    .unwrap_or(ReportOutputFormat::Json);
                report::save_scan_result(&translated, &output_path, format)?;
                eprintln!("{} {}", "Saved to:".green(), output_path.display());
            } else if let Some(format) = format {
                println!("{}", format.serialize(&translated)?);
            } else {
                report::print_scan_result(&translated);
            }
        }

        Commands::Message {
            text,
            lang,
            keep_untranslated,
        } => {
            let lang = resolve_lang(lang)?;
            let translated = i18n::translate_message(&text, lang, fallback_for(keep_untranslated))?;
            println!("{}", translated);
        }

        Commands::Check => {
            diagnostics::run_catalog_diagnostics()?;
        }

        Commands::Languages => {
            for lang in Lang::all() {
                let rules = i18n::rules_for(*lang).len();
                let note = if lang.is_source() {
                    "source".to_string()
                } else {
                    format!("{} rules", rules)
                };
                println!("  {:6} {:14} {}", lang.code().bold(), lang.native_name(), note.dimmed());
            }
        }
    }

    Ok(())
}
