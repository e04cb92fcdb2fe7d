//! Subject risk scoring.
//!
//! Maps a subject's adverse-event severities to a weighted score and a
//! three-tier category. Recomputed on each request, never persisted.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, SEVERITY_COLUMN};
use crate::error::{DataError, Result};

/// Risk tier derived from the weighted severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Band thresholds are inclusive on the lower bound.
    pub fn from_score(score: u32) -> Self {
        if score < 5 {
            Self::Low
        } else if score < 15 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-subject risk profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub subject_id: String,
    pub score: u32,
    pub category: RiskCategory,
}

fn severity_weight(severity: &str) -> u32 {
    match severity.trim().to_uppercase().as_str() {
        "MILD" => 1,
        "MODERATE" => 3,
        "SEVERE" => 5,
        _ => 0,
    }
}

/// Compute the risk profile for one subject.
///
/// Fails with `DataError::SubjectNotFound` when no record carries the
/// given `USUBJID`.
pub fn score(subject_id: &str, dataset: &Dataset) -> Result<RiskProfile> {
    let mut found = false;
    let mut total = 0u32;
    for record in dataset.subject_records(subject_id) {
        found = true;
        total += severity_weight(record.get(SEVERITY_COLUMN));
    }

    if !found {
        return Err(DataError::SubjectNotFound(subject_id.to_string()).into());
    }

    Ok(RiskProfile {
        subject_id: subject_id.to_string(),
        score: total,
        category: RiskCategory::from_score(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::dataset_from_rows;
    use crate::error::AeQueryError;

    #[test]
    fn test_severe_plus_mild_is_medium() {
        let ds = dataset_from_rows(
            &["USUBJID", "AESEV"],
            &[&["S1", "SEVERE"], &["S1", "MILD"]],
        );
        let profile = score("S1", &ds).unwrap();
        assert_eq!(profile.score, 6);
        assert_eq!(profile.category, RiskCategory::Medium);
    }

    #[test]
    fn test_three_severe_is_high_boundary() {
        let ds = dataset_from_rows(
            &["USUBJID", "AESEV"],
            &[&["S1", "SEVERE"], &["S1", "SEVERE"], &["S1", "SEVERE"]],
        );
        let profile = score("S1", &ds).unwrap();
        assert_eq!(profile.score, 15);
        assert_eq!(profile.category, RiskCategory::High);
    }

    #[test]
    fn test_medium_lower_boundary_inclusive() {
        assert_eq!(RiskCategory::from_score(4), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(5), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(14), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(15), RiskCategory::High);
    }

    #[test]
    fn test_unknown_severity_weighs_zero() {
        let ds = dataset_from_rows(
            &["USUBJID", "AESEV"],
            &[&["S1", "LIFE-THREATENING"], &["S1", "mild"]],
        );
        let profile = score("S1", &ds).unwrap();
        assert_eq!(profile.score, 1);
        assert_eq!(profile.category, RiskCategory::Low);
    }

    #[test]
    fn test_unknown_subject_is_not_found() {
        let ds = dataset_from_rows(&["USUBJID", "AESEV"], &[&["S1", "MILD"]]);
        let err = score("S9", &ds).unwrap_err();
        assert!(matches!(
            err,
            AeQueryError::Data(DataError::SubjectNotFound(_))
        ));
    }
}
