//! Configuration module for the aequery service.

mod settings;

pub use settings::{Config, DataConfig, ModelConfig, ServerConfig};
