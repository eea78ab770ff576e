//! Documentation Build Pipeline
//!
//! Stages, in order:
//! 1. Validate required directories
//! 2. Load the exclusion list
//! 3. Write the structure descriptor and the overview page
//! 4. Scan the input tree and write the navigation document
//! 5. Pre-flight and run the extractor
//! 6. Normalize every rendered page
//!
//! Stages 1-5 stop the build on the first error. Stage 4 and 6 failures on
//! individual paths are collected in the report instead.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::exclusion::ExclusionSet;
use super::normalize::{NormalizeOutcome, normalize_tree};
use super::overview::{write_overview, write_structure_descriptor};
use super::paths;
use super::summary::SummaryBuilder;
use super::tool::{ExtractRequest, Extractor};
use crate::config::Config;
use crate::types::{Diagnostic, DocifyError, Result};

/// What a successful build produced
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Directory entries in the navigation document
    pub groups: usize,
    /// Module links in the navigation document
    pub leaves: usize,
    pub normalized: NormalizeOutcome,
    /// Every path skipped during scanning or normalization
    pub diagnostics: Vec<Diagnostic>,
}

impl PipelineReport {
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Pipeline<'a> {
    config: &'a Config,
    extractor: &'a dyn Extractor,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, extractor: &'a dyn Extractor) -> Self {
        Self { config, extractor }
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let p = &self.config.paths;
        let input_dir = paths::clean(&p.input_dir);

        require_exists(&input_dir)?;
        require_exists(&p.templates_dir)?;

        let mut exclusions = ExclusionSet::load(&p.exclude_file, &input_dir)?;
        exclusions.extend(&input_dir, &self.config.docs.exclude);
        info!("Loaded {} exclusion(s)", exclusions.len());

        write_structure_descriptor(&p.structure_file, &p.readme_file, &p.summary_file)?;
        write_overview(&p.readme_file, &p.summary_file, &self.config.docs.title)?;

        let scan = SummaryBuilder::new(&input_dir, Arc::new(exclusions))
            .with_extensions(
                &self.config.docs.source_extension,
                &self.config.docs.doc_extension,
            )
            .with_layout(&p.summary_file, &p.output_dir)
            .scan();
        scan.document.write(&p.summary_file)?;
        info!(
            "Generated SUMMARY at {} ({} groups, {} modules)",
            p.summary_file.display(),
            scan.document.group_count(),
            scan.document.leaf_count()
        );

        self.extractor.preflight()?;
        info!("Running {}", self.extractor.name());
        self.extractor.extract(&ExtractRequest {
            input_dir: input_dir.clone(),
            output_dir: p.output_dir.clone(),
            templates_dir: p.templates_dir.clone(),
        })?;

        let normalized = normalize_tree(&p.output_dir, &self.config.docs.doc_extension);
        info!(
            "Normalized {} page(s), {} already clean",
            normalized.rewritten, normalized.unchanged
        );

        let mut diagnostics = scan.diagnostics;
        diagnostics.extend(normalized.diagnostics.iter().cloned());

        let report = PipelineReport {
            groups: scan.document.group_count(),
            leaves: scan.document.leaf_count(),
            normalized,
            diagnostics,
        };

        if !report.is_complete() {
            warn!("{} path(s) were skipped", report.diagnostics.len());
            if self.config.docs.strict {
                return Err(DocifyError::Incomplete {
                    count: report.diagnostics.len(),
                });
            }
        }

        Ok(report)
    }
}

fn require_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(DocifyError::MissingPath(PathBuf::from(path)))
    }
}
