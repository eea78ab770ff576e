//! Exclusion list loading and matching.
//!
//! Each line of the exclusion file is a fragment relative to the input root.
//! Fragments are joined onto the root verbatim (no globbing, no normalization)
//! and matched by exact string comparison against the paths the scanner visits.

use std::collections::HashSet;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path};

use tracing::debug;

use crate::types::{DocifyError, Result};

#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    paths: HashSet<String>,
}

impl ExclusionSet {
    /// Read `exclusion_file` and join every line onto `input_root`.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. Blank lines are kept;
    /// they resolve to `<root>/` which no visited path ever equals.
    pub fn load(exclusion_file: &Path, input_root: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(exclusion_file).map_err(|source| DocifyError::ExclusionList {
                path: exclusion_file.to_path_buf(),
                source,
            })?;

        let set = Self::from_lines(input_root, split_lines(&content));
        debug!(
            "Loaded {} exclusion(s) from {}",
            set.len(),
            exclusion_file.display()
        );
        Ok(set)
    }

    /// Build a set from in-memory fragments.
    pub fn from_lines<I, S>(input_root: &Path, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(input_root, lines);
        set
    }

    /// Add more fragments relative to `input_root`.
    pub fn extend<I, S>(&mut self, input_root: &Path, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = input_root.to_string_lossy();
        self.paths.extend(
            lines
                .into_iter()
                .map(|line| format!("{}{}{}", root, MAIN_SEPARATOR, line.as_ref())),
        );
    }

    /// Exact match against a visited path.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path.to_string_lossy().as_ref())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Strip every carriage return, then split on newlines.
fn split_lines(content: &str) -> Vec<String> {
    content
        .replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}
