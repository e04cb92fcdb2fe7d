//! Model client trait definition.

use async_trait::async_trait;

use crate::error::Result;

/// A language-model completion client.
///
/// The core treats the model as an opaque function: prompts in,
/// structured JSON text out, or an error. Implementations must surface
/// failures synchronously; there is no retry or fallback contract here.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run one completion and return the raw message content.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
