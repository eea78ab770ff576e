//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Tiers
//!
//! - **Fatal**: every `DocifyError` variant. The pipeline stops at the first one
//!   and the process exits nonzero. Files written before that point stay on disk.
//! - **Recoverable**: per-path scan or normalization failures. These never become
//!   a `DocifyError`; they are collected as [`Diagnostic`] values and logged.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Diagnostics
// =============================================================================

/// A recoverable failure tied to a single filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path that could not be read or rewritten
    pub path: PathBuf,
    /// Human-readable cause
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocifyError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Setup Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("The required path \"{}\" does not exist", .0.display())]
    MissingPath(PathBuf),

    #[error("Error reading exclusion list at {}: {source}", path.display())]
    ExclusionList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Extraction Tool Errors
    // -------------------------------------------------------------------------
    #[error(
        "Solidity compiler module not found at \"{}\". Please ensure 'solc' is installed.",
        .0.display()
    )]
    CompilerNotFound(PathBuf),

    #[error("Error executing {program}: {source}")]
    ToolLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("Error in extraction tool output: {0}")]
    ToolStderr(String),

    #[error("Extraction tool exited with {0}")]
    ToolExit(std::process::ExitStatus),

    // -------------------------------------------------------------------------
    // Strict Mode
    // -------------------------------------------------------------------------
    #[error("Documentation incomplete: {count} path(s) failed during the build")]
    Incomplete { count: usize },
}

pub type Result<T> = std::result::Result<T, DocifyError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl DocifyError {
    /// Create a write error for the given path
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Context extension trait for attaching the offending path to IO failures
pub trait ResultExt<T> {
    /// Map an IO error into `DocifyError::Write` for `path`
    fn for_write(self, path: &Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn for_write(self, path: &Path) -> Result<T> {
        self.map_err(|e| DocifyError::write(path, e))
    }
}

// =============================================================================
// Tests
// =============================================================================
