//! Filter compilation.
//!
//! Validates a filter specification against the dataset's actual
//! columns and lowers each condition into an evaluable predicate.

use crate::dataset::{Dataset, Record};
use crate::error::{QueryError, Result};
use crate::resolve::{FilterSpec, OperatorKind};

/// One lowered condition with its comparand pre-uppercased.
#[derive(Debug, Clone)]
struct CompiledCondition {
    column: String,
    operator: OperatorKind,
    value_upper: String,
}

impl CompiledCondition {
    fn matches(&self, record: &Record) -> bool {
        let field = record.get(&self.column);
        match self.operator {
            OperatorKind::Equals => field.to_uppercase() == self.value_upper,
            OperatorKind::NotEquals => field.to_uppercase() != self.value_upper,
            OperatorKind::Contains => field.to_uppercase().contains(&self.value_upper),
            OperatorKind::NotNull => !field.trim().is_empty(),
        }
    }
}

/// A compiled, conjunctive predicate over single records.
///
/// Retains the source specification so evaluation can echo it back in
/// the result. A spec with no conditions compiles to the empty
/// conjunction, which matches every record; resolution never produces
/// one, but the structured HTTP endpoint uses it to express "no
/// filters".
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    spec: FilterSpec,
    conditions: Vec<CompiledCondition>,
}

impl CompiledFilter {
    /// The specification this predicate was compiled from.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Whether a record satisfies all conditions.
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }
}

/// Compile a filter specification against a dataset.
///
/// Fails with `QueryError::UnknownColumn` when a condition references a
/// column the dataset does not have. The operator enumeration is closed
/// at the type level; unknown operator strings are rejected earlier,
/// where conditions are deserialized.
pub fn compile(spec: &FilterSpec, dataset: &Dataset) -> Result<CompiledFilter> {
    let mut conditions = Vec::with_capacity(spec.len());
    for condition in &spec.conditions {
        if !dataset.has_column(&condition.column) {
            return Err(QueryError::UnknownColumn(condition.column.clone()).into());
        }
        conditions.push(CompiledCondition {
            column: condition.column.clone(),
            operator: condition.operator,
            value_upper: condition.value.to_uppercase(),
        });
    }
    Ok(CompiledFilter {
        spec: spec.clone(),
        conditions,
    })
}
