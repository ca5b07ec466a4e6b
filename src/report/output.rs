// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization formats for stored scan results

use crate::types::ScanResult;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, result: &ScanResult) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        }
    }

    pub fn deserialize(&self, raw: &str) -> Result<ScanResult> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::from_str(raw)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }
}
