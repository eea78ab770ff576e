//! Generate Command
//!
//! Build the documentation tree: scaffolding, extraction, normalization.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::config::Config;
use crate::docgen::{Pipeline, PipelineReport, SolidityDocgen};
use crate::types::Result;

/// CLI overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Input directory override
    pub input: Option<PathBuf>,
    /// Output directory override
    pub output: Option<PathBuf>,
    /// Fail when any path is skipped
    pub strict: bool,
    /// Only print errors
    pub quiet: bool,
}

impl GenerateOptions {
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.paths.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output_dir = output.clone();
        }
        if self.strict {
            config.docs.strict = true;
        }
    }
}

pub fn run(config_path: Option<&Path>, options: GenerateOptions) -> Result<PipelineReport> {
    let mut ctx = CommandContext::load(config_path)?;
    options.apply(&mut ctx.config);
    debug!("Building docs from {}", ctx.project_root.display());

    let extractor = SolidityDocgen::from_config(&ctx.config);
    let report = Pipeline::new(&ctx.config, &extractor).run()?;

    Output::new(options.quiet).report(&report);
    Ok(report)
}
