//! Configuration Types
//!
//! All configuration structures with defaults matching the conventional
//! contract-box layout (`box/contracts`, `box/docgen`, `docs/solidity`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{DocifyError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input, output and scaffolding locations
    pub paths: PathsConfig,

    /// Navigation and normalization settings
    pub docs: DocsConfig,

    /// Settings forwarded to the compiler through the extraction tool
    pub compiler: CompilerConfig,

    /// Extraction tool launcher
    pub tool: ToolConfig,
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocifyError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.docs.source_extension.is_empty() || self.docs.doc_extension.is_empty() {
            return Err(DocifyError::Config(
                "source_extension and doc_extension must not be empty".to_string(),
            ));
        }

        if self.docs.source_extension == self.docs.doc_extension {
            return Err(DocifyError::Config(format!(
                "source_extension and doc_extension must differ, both are '{}'",
                self.docs.source_extension
            )));
        }

        if self.compiler.optimizer.enabled && self.compiler.optimizer.runs == 0 {
            return Err(DocifyError::Config(
                "compiler.optimizer.runs must be greater than 0 when the optimizer is enabled"
                    .to_string(),
            ));
        }

        if self.tool.program.trim().is_empty() {
            return Err(DocifyError::Config(
                "tool.program must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Paths Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding installed tool packages (`solidity-docgen`, `solc`)
    pub tool_dir: PathBuf,

    /// Directory containing the contract sources
    pub input_dir: PathBuf,

    /// Template directory handed to the extraction tool
    pub templates_dir: PathBuf,

    /// Newline-delimited list of input-relative paths to skip
    pub exclude_file: PathBuf,

    /// Where the extraction tool writes rendered documents
    pub output_dir: PathBuf,

    /// Overview document
    pub readme_file: PathBuf,

    /// Navigation document
    pub summary_file: PathBuf,

    /// GitBook structure descriptor
    pub structure_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tool_dir: PathBuf::from("node_modules"),
            input_dir: PathBuf::from("box/contracts"),
            templates_dir: PathBuf::from("box/docgen"),
            exclude_file: PathBuf::from("box/docgen/exclude.txt"),
            output_dir: PathBuf::from("docs/solidity/contracts"),
            readme_file: PathBuf::from("docs/solidity/README.md"),
            summary_file: PathBuf::from("docs/solidity/SUMMARY.md"),
            structure_file: PathBuf::from(".gitbook.yaml"),
        }
    }
}

// =============================================================================
// Docs Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Heading of the overview document
    pub title: String,

    /// Extension of documentable modules (without the dot)
    pub source_extension: String,

    /// Extension of rendered documents (without the dot)
    pub doc_extension: String,

    /// Extra input-relative exclusions, appended to the exclusion file
    pub exclude: Vec<String>,

    /// Fail the build when any path could not be scanned or normalized
    pub strict: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: "Solidity Project".to_string(),
            source_extension: "sol".to_string(),
            doc_extension: "md".to_string(),
            exclude: Vec::new(),
            strict: false,
        }
    }
}

// =============================================================================
// Compiler Configuration
// =============================================================================

/// Serialized verbatim into the extraction tool's `--solc-settings` argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Import remapping table
    pub remappings: Vec<String>,

    pub optimizer: OptimizerConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            remappings: vec!["@openzeppelin/=./node_modules/@openzeppelin/".to_string()],
            optimizer: OptimizerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: 200,
        }
    }
}

// =============================================================================
// Tool Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Interpreter used to launch the extraction tool
    pub program: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "node".to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
