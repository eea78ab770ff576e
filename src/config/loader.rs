//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (`docify.toml`, or the file given with `--config`)
//! 3. Environment variables (`DOCIFY_*` prefix, `__` separates sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{DocifyError, Result, ResultExt};

/// Default project config file name
pub const CONFIG_FILE: &str = "docify.toml";

/// Environment variable prefix (e.g. `DOCIFY_PATHS__INPUT_DIR` -> `paths.input_dir`)
pub const ENV_PREFIX: &str = "DOCIFY_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → project file → env vars
    ///
    /// A missing project file is not an error; the defaults apply.
    pub fn load(config_path: Option<&Path>) -> Result<Config> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::project_config_path);

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if path.exists() {
            debug!("Loading project config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else if config_path.is_some() {
            return Err(DocifyError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocifyError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only (no environment)
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocifyError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Render the effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| DocifyError::Config(e.to_string()))
        }
    }

    /// Write a default `docify.toml` into `dir`
    pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() && !force {
            return Err(DocifyError::Config(format!(
                "{} already exists. Use --force to overwrite.",
                config_path.display()
            )));
        }

        fs::write(&config_path, Self::default_project_config()).for_write(&config_path)?;
        info!("Created project config: {}", config_path.display());

        Ok(config_path)
    }

    /// Generate default project config content (TOML)
    fn default_project_config() -> String {
        r#"# docify configuration
# Every key is optional; the values below are the built-in defaults.

[paths]
tool_dir = "node_modules"
input_dir = "box/contracts"
templates_dir = "box/docgen"
exclude_file = "box/docgen/exclude.txt"
output_dir = "docs/solidity/contracts"
readme_file = "docs/solidity/README.md"
summary_file = "docs/solidity/SUMMARY.md"
structure_file = ".gitbook.yaml"

[docs]
title = "Solidity Project"
source_extension = "sol"
doc_extension = "md"
exclude = []
strict = false

[compiler]
remappings = ["@openzeppelin/=./node_modules/@openzeppelin/"]

[compiler.optimizer]
enabled = true
runs = 200

[tool]
program = "node"
"#
        .to_string()
    }
}
