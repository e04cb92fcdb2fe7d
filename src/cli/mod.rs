//! CLI module for the AEQuery command-line interface.
//!
//! Command handlers construct an agent from the loaded configuration and
//! print results as JSON or human-readable text.

mod commands;
mod output;

pub use commands::*;
