// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of scan results

use crate::types::*;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, result: &ScanResult) {
        println!("\n{}", "=== MAIL CHECK SCAN RESULT ===".bold().cyan());
        if let Some(ts) = &result.timestamp {
            println!("  Scanned at: {}", ts.to_rfc3339());
        }
        println!();

        match &result.domain {
            Some(domain) => self.print_domain(domain),
            None => println!("{}", "No domain checks performed".dimmed()),
        }
        println!();

        match &result.dkim {
            Some(dkim) => self.print_section("DKIM", dkim.valid, &dkim.errors, &dkim.warnings),
            None => println!("{}", "No DKIM check performed".dimmed()),
        }
        println!();
    }

    fn print_domain(&self, domain: &DomainScanResult) {
        println!("{} {}", "DOMAIN".bold().yellow(), domain.domain);
        if domain.base_domain != domain.domain {
            println!("  Base domain: {}", domain.base_domain);
        }
        for warning in &domain.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
        println!();

        if let Some(spf) = &domain.spf {
            self.print_section("SPF", spf.valid, &spf.errors, &spf.warnings);
            if let Some(record) = &spf.record {
                println!("    Record: {}", record.dimmed());
            }
            println!();
        }
        if let Some(dmarc) = &domain.dmarc {
            self.print_section("DMARC", dmarc.valid, &dmarc.errors, &dmarc.warnings);
            if let Some(location) = &dmarc.location {
                println!("    Location: {}", location.dimmed());
            }
            if let Some(record) = &dmarc.record {
                println!("    Record: {}", record.dimmed());
            }
        }
    }

    fn print_section(&self, name: &str, valid: bool, errors: &[String], warnings: &[String]) {
        let status = if valid { "VALID".green() } else { "INVALID".red() };
        println!("  {}: {}", name.bold(), status);
        for error in errors {
            println!("    {} {}", "x".red().bold(), error);
        }
        for warning in warnings {
            println!("    {} {}", "!".yellow(), warning);
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
