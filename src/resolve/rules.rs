//! Rule-based resolver strategy.
//!
//! Deterministic keyword matching used when no model credential is
//! configured. Must be exactly reproducible: the same question always
//! yields the same resolution.

use super::types::{
    FilterCondition, ModelFilterResult, OperatorKind, Resolution,
};

/// Minimum number of whitespace-separated tokens for a question to be
/// considered answerable.
const MIN_QUESTION_TOKENS: usize = 3;

/// Severity keywords, checked in order; the last match wins when a
/// question mentions more than one severity.
const SEVERITY_KEYWORDS: [(&str, &str); 3] = [
    ("severe", "SEVERE"),
    ("moderate", "MODERATE"),
    ("mild", "MILD"),
];

/// Keyword-matching resolver over the lower-cased question text.
#[derive(Debug, Clone, Default)]
pub struct RuleResolver;

impl RuleResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a question into a filter specification or a clarification.
    ///
    /// Never fails: insufficient or unrecognized questions resolve to a
    /// clarification request.
    pub fn resolve(&self, question: &str) -> Resolution {
        let text = question.to_lowercase();
        let mut filters = Vec::new();

        // Mutually exclusive severity slot: later keyword matches
        // overwrite earlier ones.
        let mut severity = None;
        for (keyword, value) in SEVERITY_KEYWORDS {
            if text.contains(keyword) {
                severity = Some(value);
            }
        }
        if let Some(value) = severity {
            filters.push(FilterCondition::new("AESEV", OperatorKind::Equals, value));
        }

        if text.contains("headache") {
            filters.push(FilterCondition::new(
                "AETERM",
                OperatorKind::Equals,
                "HEADACHE",
            ));
        }
        if text.contains("cardiac") {
            filters.push(FilterCondition::new(
                "AESOC",
                OperatorKind::Contains,
                "CARDIAC",
            ));
        }
        if text.contains("treatment-emergent") || text.contains("teae") {
            filters.push(FilterCondition::new("TRTEMFL", OperatorKind::Equals, "Y"));
        }
        if text.contains("related to drug") || text.contains("drug-related") {
            filters.push(FilterCondition::new("AEREL", OperatorKind::NotNull, ""));
            filters.push(FilterCondition::new(
                "AEREL",
                OperatorKind::NotEquals,
                "NONE",
            ));
        }

        let needs_clarification =
            text.split_whitespace().count() < MIN_QUESTION_TOKENS || filters.is_empty();

        let result = ModelFilterResult {
            filters: if needs_clarification { Vec::new() } else { filters },
            needs_clarification,
            clarification_question: String::new(),
        };
        result.into_resolution()
    }
}
