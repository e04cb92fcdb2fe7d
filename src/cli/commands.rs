//! CLI command dispatcher.
//!
//! Each command builds an agent from the loaded configuration, runs one
//! operation, and hands the result to the output formatter.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use aequery::{
    agent::Agent,
    dataset::{load_csv, SchemaRegistry},
    resolve::IntentResolver,
    Config,
};
use anyhow::Result;

use super::output;

/// Build an agent from the configuration: load the dataset and select
/// the resolution strategy.
pub fn build_agent(config: &Config) -> Result<Agent> {
    let dataset = load_csv(config.data.resolved_path())?;
    let resolver = IntentResolver::from_config(&config.model, SchemaRegistry::clinical_default())?;
    Ok(Agent::new(resolver, Arc::new(dataset)))
}

/// Run the ask command.
pub async fn run_ask(config: Config, question: String, json_output: bool) -> Result<()> {
    let agent = build_agent(&config)?;
    let outcome = agent.ask(&question).await?;
    output::print_outcome(&outcome, json_output);
    Ok(())
}

/// Run the risk command.
pub async fn run_risk(config: Config, subject_id: String, json_output: bool) -> Result<()> {
    let agent = build_agent(&config)?;
    let profile = agent.subject_risk(&subject_id)?;
    output::print_risk(&profile, json_output);
    Ok(())
}

/// Run the interactive question loop.
///
/// Reads one question per line from stdin until EOF or an exit word.
pub async fn run_repl(config: Config, json_output: bool) -> Result<()> {
    let agent = build_agent(&config)?;

    println!("Adverse Event Query Agent");
    println!("Ask questions about the adverse event data, or 'exit' to quit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        match agent.ask(question).await {
            Ok(outcome) => output::print_outcome(&outcome, json_output),
            Err(e) => eprintln!("Error: {e}"),
        }
        println!();
    }
    Ok(())
}
