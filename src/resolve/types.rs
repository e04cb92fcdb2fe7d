//! Types for intent resolution.
//!
//! Both resolver strategies (model-backed and rule-based) produce the
//! same output contract: a [`ModelFilterResult`] that collapses into a
//! [`Resolution`]. A resolution is either a non-empty conjunctive
//! filter specification or a clarification request; an empty filter
//! list always routes to clarification, never to the evaluator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::QueryError;

/// Default prompt surfaced when a question cannot be mapped to a filter.
pub const DEFAULT_CLARIFICATION: &str = "Can you clarify what you want to filter by \
     (e.g., severity, AE term, body system, treatment-emergent, drug-related)?";

// ============================================================================
// Operators
// ============================================================================

/// Closed enumeration of filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Equals,
    NotEquals,
    Contains,
    NotNull,
}

impl OperatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::NotNull => "not_null",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Self::Equals),
            "not_equals" => Ok(Self::NotEquals),
            "contains" => Ok(Self::Contains),
            "not_null" => Ok(Self::NotNull),
            other => Err(QueryError::UnsupportedOperator(other.to_string())),
        }
    }
}

// Operators arrive as strings on every wire surface (model output, HTTP
// bodies); unknown names must surface as "unsupported operator" rather
// than a generic enum error.
impl<'de> Deserialize<'de> for OperatorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Filter specification
// ============================================================================

/// A single column comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Column to filter on; validated against the dataset at compile time.
    pub column: String,
    /// Filter operator.
    pub operator: OperatorKind,
    /// Comparison value. Retained but ignored for `not_null`.
    #[serde(default)]
    pub value: String,
}

impl FilterCondition {
    pub fn new(
        column: impl Into<String>,
        operator: OperatorKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Ordered, conjunctive (AND-only) sequence of filter conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec {
    pub conditions: Vec<FilterCondition>,
}

impl FilterSpec {
    pub fn new(conditions: Vec<FilterCondition>) -> Self {
        Self { conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Render a human-readable preview, e.g.
    /// `AESEV == 'SEVERE' AND AEREL is not null`.
    pub fn preview(&self) -> String {
        self.conditions
            .iter()
            .map(|c| match c.operator {
                OperatorKind::NotNull => format!("{} is not null", c.column),
                OperatorKind::Equals => format!("{} == '{}'", c.column, c.value),
                OperatorKind::NotEquals => format!("{} != '{}'", c.column, c.value),
                OperatorKind::Contains => format!("{} contains '{}'", c.column, c.value),
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl FromIterator<FilterCondition> for FilterSpec {
    fn from_iter<T: IntoIterator<Item = FilterCondition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Resolution outcome
// ============================================================================

/// Terminal, non-error outcome asking the caller to refine the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clarification {
    pub question: String,
}

impl Clarification {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Outcome of intent resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The question mapped to a non-empty filter specification.
    Filters(FilterSpec),
    /// The question needs clarification before it can be answered.
    Clarify(Clarification),
}

// ============================================================================
// Structured output contract
// ============================================================================

/// The structured output shape shared by both resolver strategies.
///
/// This is the wire schema the model is asked to produce; the
/// rule-based strategy fills it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFilterResult {
    /// List of filter conditions (conjunctive).
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
    /// True if the question is ambiguous or missing details.
    #[serde(default)]
    pub needs_clarification: bool,
    /// A short question asking the user to clarify.
    #[serde(default)]
    pub clarification_question: String,
}

impl ModelFilterResult {
    /// Collapse into a [`Resolution`]. An explicit clarification flag or
    /// an empty filter list both route to clarification.
    pub fn into_resolution(self) -> Resolution {
        if self.needs_clarification || self.filters.is_empty() {
            let question = if self.clarification_question.is_empty() {
                DEFAULT_CLARIFICATION.to_string()
            } else {
                self.clarification_question
            };
            Resolution::Clarify(Clarification::new(question))
        } else {
            Resolution::Filters(FilterSpec::new(self.filters))
        }
    }
}
