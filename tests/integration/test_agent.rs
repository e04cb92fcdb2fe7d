//! End-to-end pipeline tests: CSV on disk to answered question.

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use tempfile::TempDir;

use aequery::agent::{Agent, AskOutcome};
use aequery::dataset::load_csv;
use aequery::resolve::IntentResolver;
use aequery::risk::RiskCategory;

const TEST_CSV: &str = "\
USUBJID,AESEV,AETERM,AESOC,AEBODSYS,AEDECOD,TRTEMFL,AEREL,ACTARM
SUBJ-001,SEVERE,HEADACHE,NERVOUS SYSTEM DISORDERS,NERVOUS SYSTEM DISORDERS,HEADACHE,Y,POSSIBLE,Placebo
SUBJ-001,MILD,NAUSEA,GASTROINTESTINAL DISORDERS,GASTROINTESTINAL DISORDERS,NAUSEA,Y,NONE,Placebo
SUBJ-002,MODERATE,HEADACHE,NERVOUS SYSTEM DISORDERS,NERVOUS SYSTEM DISORDERS,HEADACHE,N,,Drug A
SUBJ-003,SEVERE,ATRIAL FIBRILLATION,CARDIAC DISORDERS,CARDIAC DISORDERS,ATRIAL FIBRILLATION,Y,PROBABLE,Drug A
SUBJ-003,SEVERE,PALPITATIONS,CARDIAC DISORDERS,CARDIAC DISORDERS,PALPITATIONS,Y,PROBABLE,Drug A
SUBJ-003,MODERATE,DIZZINESS,NERVOUS SYSTEM DISORDERS,NERVOUS SYSTEM DISORDERS,DIZZINESS,Y,POSSIBLE,Drug A
SUBJ-004,MILD,COUGH,RESPIRATORY DISORDERS,RESPIRATORY DISORDERS,COUGH,N,NONE,Placebo
";

/// Write the fixture CSV and build an agent over it.
fn create_test_agent(dir: &TempDir) -> Agent {
    let csv_path = dir.path().join("adae.csv");
    let mut file = File::create(&csv_path).unwrap();
    file.write_all(TEST_CSV.as_bytes()).unwrap();

    let dataset = load_csv(&csv_path).unwrap();
    Agent::new(IntentResolver::with_rules(), Arc::new(dataset))
}

#[tokio::test]
async fn test_severity_question_end_to_end() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    let outcome = agent
        .ask("Which subjects experienced severe adverse events?")
        .await
        .unwrap();
    match outcome {
        AskOutcome::Answer(result) => {
            assert_eq!(result.subjects, vec!["SUBJ-001", "SUBJ-003"]);
            assert_eq!(result.count, 2);
        }
        other => panic!("expected answer, got {other:?}"),
    }
}

#[tokio::test]
async fn test_conjunctive_question_end_to_end() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    let outcome = agent
        .ask("Show severe cardiac events in treatment-emergent subjects")
        .await
        .unwrap();
    match outcome {
        AskOutcome::Answer(result) => {
            // SEVERE + CARDIAC + TRTEMFL=Y only holds for SUBJ-003.
            assert_eq!(result.subjects, vec!["SUBJ-003"]);
        }
        other => panic!("expected answer, got {other:?}"),
    }
}

#[tokio::test]
async fn test_vague_question_asks_for_clarification() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    let outcome = agent
        .ask("Tell me something about the data please")
        .await
        .unwrap();
    assert!(matches!(outcome, AskOutcome::Clarify(_)));
}

#[tokio::test]
async fn test_drug_related_question_end_to_end() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    let outcome = agent
        .ask("Which subjects had events related to drug?")
        .await
        .unwrap();
    match outcome {
        AskOutcome::Answer(result) => {
            // AEREL non-empty and not NONE: SUBJ-001 (POSSIBLE), SUBJ-003.
            assert_eq!(result.subjects, vec!["SUBJ-001", "SUBJ-003"]);
        }
        other => panic!("expected answer, got {other:?}"),
    }
}

#[test]
fn test_structured_ae_query() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    let subjects = agent
        .ae_query(
            &["SEVERE".to_string(), "MODERATE".to_string()],
            Some("Drug A"),
        )
        .unwrap();
    assert_eq!(subjects, vec!["SUBJ-002", "SUBJ-003"]);
}

#[test]
fn test_subject_risk_profile() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    // SUBJ-003: SEVERE (5) + SEVERE (5) + MODERATE (3) = 13.
    let profile = agent.subject_risk("SUBJ-003").unwrap();
    assert_eq!(profile.score, 13);
    assert_eq!(profile.category, RiskCategory::Medium);

    // SUBJ-004: single MILD event.
    let profile = agent.subject_risk("SUBJ-004").unwrap();
    assert_eq!(profile.score, 1);
    assert_eq!(profile.category, RiskCategory::Low);
}

#[test]
fn test_unknown_subject_is_an_error() {
    let dir = TempDir::new().unwrap();
    let agent = create_test_agent(&dir);

    assert!(agent.subject_risk("SUBJ-999").is_err());
}
