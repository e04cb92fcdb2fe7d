//! AEQuery: Clinical Adverse-Event Question Answering
//!
//! Answers natural-language questions over a clinical adverse-event (ADAE)
//! dataset. Questions resolve to conjunctive filter specifications, either
//! via a chat-completion model or a rule-based keyword matcher, and are
//! evaluated at subject granularity. A weighted severity scorer summarizes
//! per-subject risk.

pub mod agent;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod query;
pub mod resolve;
pub mod risk;

pub use agent::{Agent, AskOutcome};
pub use api::{create_combined_router, create_rest_router, ApiState, RestApiConfig};
pub use config::Config;
pub use dataset::{load_csv, Dataset, SchemaRegistry};
pub use error::{AeQueryError, Result};
pub use query::{compile, evaluate, CompiledFilter, QueryResult};
pub use resolve::{
    Clarification, FilterCondition, FilterSpec, IntentResolver, OperatorKind, Resolution,
};
pub use risk::{RiskCategory, RiskProfile};
