//! CLI Common Utilities
//!
//! Shared context loading for command handlers.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::types::{DocifyError, Result};

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Effective configuration (defaults, file, env)
    pub config: Config,
    /// Working directory all relative paths are resolved against
    pub project_root: PathBuf,
}

impl CommandContext {
    /// Load configuration from `config_path`, or `docify.toml` when absent.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load(config_path)?;
        let project_root = std::env::current_dir().map_err(DocifyError::Io)?;

        Ok(Self {
            config,
            project_root,
        })
    }
}
