//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or human-readable text.

use aequery::{
    agent::AskOutcome,
    risk::RiskProfile,
};

/// Print the outcome of a question.
pub fn print_outcome(outcome: &AskOutcome, json: bool) {
    match outcome {
        AskOutcome::Answer(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(result).unwrap());
            } else {
                println!("Query: {}", result.filters.preview());
                println!("Matching subjects: {}", result.count);
                for subject in &result.subjects {
                    println!("  {subject}");
                }
                if result.subjects.is_empty() {
                    println!("  (none)");
                }
            }
        }
        AskOutcome::Clarify(clarification) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "needs_clarification": true,
                        "question": clarification.question,
                    }))
                    .unwrap()
                );
            } else {
                println!("{}", clarification.question);
            }
        }
    }
}

/// Print a subject risk profile.
pub fn print_risk(profile: &RiskProfile, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(profile).unwrap());
    } else {
        println!("Subject: {}", profile.subject_id);
        println!("Risk score: {}", profile.score);
        println!("Category: {}", profile.category);
    }
}
