// SPDX-License-Identifier: PMPL-1.0-or-later

//! Placeholder-aware template matching.
//!
//! A rule pairs an English source template with its localised target.
//! Templates are plain text with two reserved markers:
//!
//! - [`PLACEHOLDER`] marks a variable slot. Whatever the runtime message has
//!   at that position is captured and re-inserted into the target's slot with
//!   the same ordinal (first capture into first slot, and so on).
//! - [`IGNORED`] matches any text but captures nothing. It only appears in
//!   source templates, for variable tails the localised text drops.
//!
//! Each source template is compiled once into an anchored regex: literal
//! segments are escaped, slots become `(.*)`, so only a match of the whole
//! message counts.

use super::error::{Result, TranslateError};
use regex::Regex;

/// Marker for a captured variable slot.
pub const PLACEHOLDER: &str = "__PLACEHOLDER__";

/// Marker for a matched-but-discarded span (source templates only).
pub const IGNORED: &str = "__IGNORED__";

/// Caller-supplied strategy for messages no rule matches.
pub type Fallback<'a> = &'a dyn Fn(&str) -> String;

/// Fallback that degrades to the untranslated message.
pub fn keep_original(message: &str) -> String {
    message.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot,
    Ignored,
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = text;
        loop {
            let next = [(PLACEHOLDER, Segment::Slot), (IGNORED, Segment::Ignored)]
                .into_iter()
                .filter_map(|(marker, segment)| {
                    rest.find(marker).map(|at| (at, marker.len(), segment))
                })
                .min_by_key(|(at, _, _)| *at);

            match next {
                Some((at, len, segment)) => {
                    if at > 0 {
                        segments.push(Segment::Literal(rest[..at].to_string()));
                    }
                    segments.push(segment);
                    rest = &rest[at + len..];
                }
                None => {
                    if !rest.is_empty() {
                        segments.push(Segment::Literal(rest.to_string()));
                    }
                    break;
                }
            }
        }
        Self { segments }
    }

    /// Number of captured slots.
    pub fn slot_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Slot))
            .count()
    }

    pub fn has_ignored(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Ignored))
    }

    /// Anchored regex source matching a whole message against this template.
    ///
    /// Literals are escaped segment by segment, so marker text never leaks
    /// into the pattern as anything but a slot.
    pub fn pattern(&self) -> String {
        let mut pattern = String::from("(?s)^");
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
                Segment::Slot => pattern.push_str("(.*)"),
                Segment::Ignored => pattern.push_str(".*"),
            }
        }
        pattern.push('$');
        pattern
    }

    /// Fill the slots left to right with `values`.
    ///
    /// Slots beyond the supplied values are left empty; compiled catalogs
    /// guarantee the counts agree.
    pub fn fill<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut values = values.iter();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot => {
                    if let Some(value) = values.next() {
                        out.push_str(value.as_ref());
                    }
                }
                Segment::Ignored => {}
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Regex,
    target: Template,
}

/// An ordered, validated, precompiled set of translation rules.
///
/// Immutable once built, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rules: Vec<CompiledRule>,
}

impl Catalog {
    /// Validate and compile `rules`, preserving their order.
    ///
    /// Fails with [`TranslateError::MalformedRule`] if a source and target
    /// disagree on slot count or a target uses [`IGNORED`].
    pub fn compile(rules: &[(&str, &str)]) -> Result<Self> {
        let compiled = rules
            .iter()
            .enumerate()
            .map(|(index, (source, target))| compile_rule(index, source, target))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules: compiled })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Translate using the first matching rule, or `None` when nothing matches.
    pub fn lookup(&self, message: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            rule.pattern.captures(message).map(|caps| {
                let values: Vec<&str> = caps
                    .iter()
                    .skip(1)
                    .map(|m| m.map_or("", |m| m.as_str()))
                    .collect();
                rule.target.fill(&values)
            })
        })
    }
}

fn compile_rule(index: usize, source: &str, target: &str) -> Result<CompiledRule> {
    let source = Template::parse(source);
    let target = Template::parse(target);

    if target.has_ignored() {
        return Err(TranslateError::malformed(
            index,
            format!("target template may not contain {}", IGNORED),
        ));
    }
    if source.slot_count() != target.slot_count() {
        return Err(TranslateError::malformed(
            index,
            format!(
                "source has {} slot(s), target has {}",
                source.slot_count(),
                target.slot_count()
            ),
        ));
    }

    let pattern =
        Regex::new(&source.pattern()).map_err(|source| TranslateError::Pattern { index, source })?;
    Ok(CompiledRule { pattern, target })
}

/// Translate `message` with the first matching rule of `catalog`.
///
/// When no rule matches, `fallback` decides the result; without one the
/// call fails with [`TranslateError::UnsupportedMessage`].
pub fn translate(message: &str, catalog: &Catalog, fallback: Option<Fallback>) -> Result<String> {
    if let Some(translated) = catalog.lookup(message) {
        return Ok(translated);
    }
    match fallback {
        Some(handler) => Ok(handler(message)),
        None => Err(TranslateError::UnsupportedMessage(message.to_string())),
    }
}
