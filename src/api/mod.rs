//! REST API module for AEQuery.
//!
//! Exposes the question-answering agent over HTTP for web applications
//! and services that do not go through the CLI.

mod handlers;
mod rest;

pub use handlers::*;
pub use rest::*;
