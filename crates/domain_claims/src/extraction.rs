//! Pattern-based field extraction
//!
//! A [`FieldRule`] pairs a claim field with a compiled, case-insensitive
//! pattern. The [`PatternExtractor`] runs an ordered list of rules over the
//! document text and records every configured field, present or absent.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ClaimField, ExtractionResult};
use crate::error::ClaimError;

/// Which capture group supplies a rule's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePolicy {
    /// The first group that participated in the match with non-empty text
    #[default]
    FirstNonEmpty,
    /// A specific group, counted from 1
    Group(usize),
}

/// An extraction rule for a single field
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: ClaimField,
    pattern: Regex,
    capture: CapturePolicy,
}

impl FieldRule {
    /// Compiles a case-insensitive rule using the first non-empty group
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile or has no capture
    /// group to take a value from.
    pub fn new(field: ClaimField, pattern: &str) -> Result<Self, ClaimError> {
        Self::with_capture(field, pattern, CapturePolicy::FirstNonEmpty)
    }

    /// Compiles a case-insensitive rule with an explicit capture policy
    pub fn with_capture(
        field: ClaimField,
        pattern: &str,
        capture: CapturePolicy,
    ) -> Result<Self, ClaimError> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ClaimError::InvalidPattern { field, source })?;

        // captures_len counts the implicit whole-match group
        let groups = pattern.captures_len() - 1;
        let required = match capture {
            CapturePolicy::FirstNonEmpty => 1,
            CapturePolicy::Group(n) => n,
        };
        if required == 0 || required > groups {
            return Err(ClaimError::InvalidCaptureGroup { field, group: required });
        }

        Ok(Self { field, pattern, capture })
    }

    pub fn field(&self) -> ClaimField {
        self.field
    }

    /// Source text of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn capture(&self) -> CapturePolicy {
        self.capture
    }

    /// Applies the rule, returning the trimmed captured value
    pub fn apply(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let value = match self.capture {
            CapturePolicy::FirstNonEmpty => captures
                .iter()
                .skip(1)
                .flatten()
                .find(|m| !m.as_str().is_empty())?,
            CapturePolicy::Group(n) => captures.get(n)?,
        };
        Some(value.as_str().trim().to_string())
    }
}

/// Runs an ordered list of field rules over a text
///
/// Every field named by a rule appears in the result. When several rules
/// target the same field, the first one that finds a non-blank value keeps
/// it and the later ones only fill the gap. A blank capture counts as a gap.
pub fn extract(text: &str, rules: &[FieldRule]) -> ExtractionResult {
    let mut result = ExtractionResult::new();

    for rule in rules {
        if result.is_populated(rule.field) {
            continue;
        }
        let value = rule.apply(text);
        debug!(field = %rule.field, found = value.is_some(), "Applied field rule");
        if value.is_some() || !result.contains(rule.field) {
            result.record(rule.field, value);
        }
    }

    result
}

/// Extractor holding a fixed, ordered rule set
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    rules: Vec<FieldRule>,
}

impl PatternExtractor {
    /// Creates an extractor over the given rules, preserving their order
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Extracts every configured field from the text
    pub fn extract(&self, text: &str) -> ExtractionResult {
        extract(text, &self.rules)
    }
}
