//! Question-answering agent.
//!
//! Orchestrates one resolution cycle: question → intent resolution →
//! filter compilation → evaluation. Every entity beyond the shared
//! dataset handle is request-scoped; concurrent questions share nothing
//! mutable.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::query::{compile, evaluate, QueryResult};
use crate::resolve::{
    Clarification, FilterCondition, FilterSpec, IntentResolver, OperatorKind, Resolution,
};
use crate::risk::{self, RiskProfile};

/// Terminal outcome of a resolution + evaluation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The question was answered.
    Answer(QueryResult),
    /// The question needs clarification; no evaluation happened.
    Clarify(Clarification),
}

/// Agent wiring the resolver, compiler and evaluator over one dataset.
pub struct Agent {
    resolver: IntentResolver,
    dataset: Arc<Dataset>,
}

impl Agent {
    pub fn new(resolver: IntentResolver, dataset: Arc<Dataset>) -> Self {
        Self { resolver, dataset }
    }

    /// The dataset this agent answers over.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Answer a natural-language question.
    pub async fn ask(&self, question: &str) -> Result<AskOutcome> {
        match self.resolver.resolve(question).await? {
            Resolution::Clarify(clarification) => {
                tracing::info!("question routed to clarification");
                Ok(AskOutcome::Clarify(clarification))
            }
            Resolution::Filters(spec) => {
                let result = self.query(&spec)?;
                tracing::info!(
                    filters = spec.len(),
                    subjects = result.count,
                    "answered question"
                );
                Ok(AskOutcome::Answer(result))
            }
        }
    }

    /// Evaluate an explicit filter specification.
    pub fn query(&self, spec: &FilterSpec) -> Result<QueryResult> {
        let compiled = compile(spec, &self.dataset)?;
        Ok(evaluate(&compiled, &self.dataset))
    }

    /// Structured adverse-event query: subjects whose severity is any of
    /// `severities` (union) and whose treatment arm matches, when given.
    ///
    /// Each severity value becomes one conjunctive specification; the
    /// per-value results are merged at subject granularity. An empty
    /// severity list applies only the arm condition (or none at all).
    pub fn ae_query(&self, severities: &[String], treatment_arm: Option<&str>) -> Result<Vec<String>> {
        let arm_condition =
            treatment_arm.map(|arm| FilterCondition::new("ACTARM", OperatorKind::Equals, arm));

        let specs: Vec<FilterSpec> = if severities.is_empty() {
            vec![FilterSpec::new(arm_condition.into_iter().collect())]
        } else {
            severities
                .iter()
                .map(|severity| {
                    let mut conditions = vec![FilterCondition::new(
                        "AESEV",
                        OperatorKind::Equals,
                        severity.clone(),
                    )];
                    conditions.extend(arm_condition.clone());
                    FilterSpec::new(conditions)
                })
                .collect()
        };

        let mut subjects = std::collections::BTreeSet::new();
        for spec in &specs {
            subjects.extend(self.query(spec)?.subjects);
        }
        Ok(subjects.into_iter().collect())
    }

    /// Risk profile for one subject.
    pub fn subject_risk(&self, subject_id: &str) -> Result<RiskProfile> {
        risk::score(subject_id, &self.dataset)
    }
}
