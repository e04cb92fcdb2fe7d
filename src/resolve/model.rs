//! Model-backed resolver strategy.
//!
//! Renders the column schema and question into a structured prompt,
//! invokes the model client, and parses the reply against the fixed
//! output schema. A failed call or a non-conforming reply is a hard
//! error; it is never silently downgraded to the rule-based strategy.

use std::sync::Arc;

use crate::dataset::SchemaRegistry;
use crate::error::{ModelError, Result};
use crate::model::ModelClient;

use super::types::{ModelFilterResult, Resolution};

const SYSTEM_PROMPT: &str = "You are a clinical data assistant. Map the user question to the \
     most appropriate column and value from the schema. If the question is ambiguous or missing \
     details, set needs_clarification=true and provide a short clarification_question. \
     Return only JSON that matches the schema.";

const FORMAT_INSTRUCTIONS: &str = r#"Respond with a JSON object of this exact shape:
{
  "filters": [{"column": "<column name>", "operator": "equals|not_equals|contains|not_null", "value": "<comparison value>"}],
  "needs_clarification": <bool>,
  "clarification_question": "<short question, empty when not needed>"
}"#;

/// Resolver strategy that delegates question understanding to a model.
pub struct ModelResolver {
    client: Arc<dyn ModelClient>,
    schema: SchemaRegistry,
}

impl ModelResolver {
    pub fn new(client: Arc<dyn ModelClient>, schema: SchemaRegistry) -> Self {
        Self { client, schema }
    }

    /// Resolve a question via one model call.
    pub async fn resolve(&self, question: &str) -> Result<Resolution> {
        let user_prompt = format!(
            "Schema:\n{}\n\nQuestion:\n{}\n\n{}",
            self.schema.render(),
            question,
            FORMAT_INSTRUCTIONS
        );

        tracing::debug!(model = self.client.model_name(), "invoking model resolver");
        let raw = self.client.complete(SYSTEM_PROMPT, &user_prompt).await?;
        let result = parse_response(&raw)?;
        Ok(result.into_resolution())
    }
}

/// Parse the model reply against [`ModelFilterResult`], tolerating a
/// markdown code fence around the JSON body.
fn parse_response(raw: &str) -> Result<ModelFilterResult> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned)
        .map_err(|e| ModelError::MalformedResponse(e.to_string()).into())
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
