// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading, writing and printing scan results

pub mod formatter;
pub mod output;

use crate::types::ScanResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Load a stored scan result. The format follows the file extension and
/// defaults to JSON.
pub fn load_scan_result<P: AsRef<Path>>(path: P) -> Result<ScanResult> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scan result {}", path.display()))?;
    let format = ReportOutputFormat::from_path(path).unwrap_or(ReportOutputFormat::Json);
    format
        .deserialize(&raw)
        .with_context(|| format!("parsing scan result {}", path.display()))
}

/// Write a scan result in `format`.
pub fn save_scan_result<P: AsRef<Path>>(
    result: &ScanResult,
    path: P,
    format: ReportOutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let content = format.serialize(result)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Print a scan result to the console
pub fn print_scan_result(result: &ScanResult) {
    ReportFormatter::new().print(result);
}
