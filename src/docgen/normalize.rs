//! Markdown normalization for rendered pages.
//!
//! Templates tend to leave runs of blank lines behind. Every page is reduced
//! to its non-blank lines separated by exactly one blank line, with nothing
//! before the first line or after the last one.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::walk;
use crate::constants::normalize::SEPARATOR;
use crate::types::Diagnostic;

/// Collapse blank-line runs. Idempotent.
pub fn normalize_markdown(text: &str) -> String {
    text.replace('\r', "")
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Summary of a normalization pass
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    /// Pages whose content changed
    pub rewritten: usize,
    /// Pages already in normal form
    pub unchanged: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl NormalizeOutcome {
    pub fn total(&self) -> usize {
        self.rewritten + self.unchanged
    }
}

/// Normalize every file under `root` with the `doc_extension` extension.
///
/// Other files are left untouched. Per-path failures are collected and the
/// walk carries on.
pub fn normalize_tree(root: &Path, doc_extension: &str) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for result in walk::sorted_walker(root, |_| false) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let diag = walk::diagnostic(&err, root);
                warn!("Error fixing path {}", diag);
                outcome.diagnostics.push(diag);
                continue;
            }
        };

        if entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == doc_extension)
        {
            continue;
        }

        match normalize_file(path) {
            Ok(true) => {
                debug!("Normalized {}", path.display());
                outcome.rewritten += 1;
            }
            Ok(false) => outcome.unchanged += 1,
            Err(err) => {
                let diag = Diagnostic::new(path, err.to_string());
                warn!("Error fixing path {}", diag);
                outcome.diagnostics.push(diag);
            }
        }
    }

    outcome
}

/// Returns whether the file had to be rewritten.
fn normalize_file(path: &Path) -> std::io::Result<bool> {
    let original = fs::read_to_string(path)?;
    let normalized = normalize_markdown(&original);
    if normalized == original {
        return Ok(false);
    }
    fs::write(path, normalized)?;
    Ok(true)
}
