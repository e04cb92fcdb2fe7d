//! Intent resolver with strategy selection at construction.

use std::sync::Arc;

use crate::config::ModelConfig;
use crate::dataset::SchemaRegistry;
use crate::error::Result;
use crate::model::{ApiModelClient, ModelClient};

use super::model::ModelResolver;
use super::rules::RuleResolver;
use super::types::Resolution;

/// Converts a question into a filter specification or a clarification.
///
/// The strategy is chosen once, when the resolver is built: a configured
/// model credential selects the model-backed strategy, otherwise the
/// deterministic rule-based strategy. This is not a fallback chain — a
/// transient model failure at resolve time surfaces as an error.
pub struct IntentResolver {
    strategy: Strategy,
}

enum Strategy {
    Model(ModelResolver),
    Rules(RuleResolver),
}

impl IntentResolver {
    /// Build a resolver from configuration.
    pub fn from_config(config: &ModelConfig, schema: SchemaRegistry) -> Result<Self> {
        if config.resolve_api_key().is_some() {
            let client = ApiModelClient::from_config(config)?;
            tracing::info!(model = %config.model, "using model-backed resolver");
            Ok(Self::with_model(Arc::new(client), schema))
        } else {
            tracing::info!("no model credential configured, using rule-based resolver");
            Ok(Self::with_rules())
        }
    }

    /// Build a model-backed resolver with an explicit client.
    pub fn with_model(client: Arc<dyn ModelClient>, schema: SchemaRegistry) -> Self {
        Self {
            strategy: Strategy::Model(ModelResolver::new(client, schema)),
        }
    }

    /// Build a rule-based resolver.
    pub fn with_rules() -> Self {
        Self {
            strategy: Strategy::Rules(RuleResolver::new()),
        }
    }

    /// Whether the model-backed strategy is active.
    pub fn is_model_backed(&self) -> bool {
        matches!(self.strategy, Strategy::Model(_))
    }

    /// Resolve a question. Ambiguity is a [`Resolution::Clarify`], never
    /// an error; errors are reserved for model invocation failures.
    pub async fn resolve(&self, question: &str) -> Result<Resolution> {
        match &self.strategy {
            Strategy::Model(resolver) => resolver.resolve(question).await,
            Strategy::Rules(resolver) => Ok(resolver.resolve(question)),
        }
    }
}
