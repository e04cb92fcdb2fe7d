//! Query evaluation.
//!
//! Applies a compiled predicate to every record and reports results at
//! subject granularity: the deduplicated, lexicographically sorted set
//! of matching `USUBJID` values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::resolve::FilterSpec;

use super::compile::CompiledFilter;

/// Result of evaluating a filter against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The filter specification that produced this result.
    pub filters: FilterSpec,
    /// Number of distinct matching subjects (not matching rows).
    pub count: usize,
    /// Deduplicated, ascending subject identifiers.
    pub subjects: Vec<String>,
}

/// Evaluate a compiled filter against the dataset.
///
/// Pure over its inputs: re-running against an unchanged dataset yields
/// an identical result.
pub fn evaluate(filter: &CompiledFilter, dataset: &Dataset) -> QueryResult {
    let subjects: BTreeSet<String> = dataset
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| record.subject_id())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    let subjects: Vec<String> = subjects.into_iter().collect();
    QueryResult {
        filters: filter.spec().clone(),
        count: subjects.len(),
        subjects,
    }
}
