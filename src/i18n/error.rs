// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type shared by the template matcher and the result translator.

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone)]
pub enum TranslateError {
    /// No catalog rule matched and the caller supplied no fallback.
    #[error("unable to translate: {0}")]
    UnsupportedMessage(String),
    /// A catalog rule broke the slot invariant. Authoring error, caught when
    /// the catalog is compiled.
    #[error("malformed rule #{index}: {reason}")]
    MalformedRule { index: usize, reason: String },
    #[error("invalid pattern for rule #{index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: regex::Error,
    },
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl TranslateError {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            index,
            reason: reason.into(),
        }
    }
}
