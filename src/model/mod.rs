//! Language-model client.
//!
//! The model is an external collaborator: prompts in, structured JSON
//! text out, or an error. [`ApiModelClient`] talks to any
//! OpenAI-compatible chat-completions endpoint; tests swap in mock
//! implementations of [`ModelClient`].

mod api;
mod traits;

pub use api::ApiModelClient;
pub use traits::ModelClient;
