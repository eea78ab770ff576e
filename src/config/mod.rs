//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Project config (docify.toml)
//! 3. Environment variables (DOCIFY_*)
//! 4. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::{CONFIG_FILE, ConfigLoader, ENV_PREFIX};
pub use types::*;
