//! docify - Documentation Tree Assembler for Smart Contracts
//!
//! Builds a GitBook-ready documentation tree for a directory of contract
//! sources: an overview page, a nested table of contents, and one rendered
//! page per contract produced by an external extractor (`solidity-docgen`).
//!
//! ## Quick Start
//!
//! ```ignore
//! use docify::{ConfigLoader, Pipeline, SolidityDocgen};
//!
//! let config = ConfigLoader::load(None)?;
//! let extractor = SolidityDocgen::from_config(&config);
//! let report = Pipeline::new(&config, &extractor).run()?;
//! println!("{} modules documented", report.leaves);
//! ```
//!
//! ## Modules
//!
//! - [`docgen`]: scanning, scaffolding, extraction and normalization
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers for the `docify` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod docgen;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{Diagnostic, DocifyError, Result, ResultExt};

// Pipeline
pub use docgen::{
    ExclusionSet, ExtractRequest, Extractor, NavigationDocument, NavigationEntry, Pipeline,
    PipelineReport, SolidityDocgen, SummaryBuilder,
};
