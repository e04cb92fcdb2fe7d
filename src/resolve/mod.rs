//! Intent resolution for natural-language questions.
//!
//! This module provides:
//! - The shared output contract both strategies produce
//! - The deterministic rule-based resolver (keyword matching)
//! - The model-backed resolver (structured prompt + strict parsing)
//! - Strategy selection at construction time

pub mod model;
pub mod resolver;
pub mod rules;
pub mod types;

pub use model::ModelResolver;
pub use resolver::IntentResolver;
pub use rules::RuleResolver;
pub use types::{
    Clarification, FilterCondition, FilterSpec, ModelFilterResult, OperatorKind, Resolution,
};
