//! Navigation document (SUMMARY.md) generation.
//!
//! The input tree is walked once, pre-order, siblings sorted by name. Every
//! directory becomes a group line and every documentable module a link to the
//! page the extraction tool renders for it. The document is assembled in
//! memory and written in one go once the walk is over.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::exclusion::ExclusionSet;
use super::paths;
use super::walk;
use crate::constants::summary::{HEADER, INDENT};
use crate::types::{Diagnostic, Result, ResultExt};

/// One line of the navigation document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEntry {
    /// A directory
    Group { label: String, depth: usize },
    /// A documentable module and the rendered page it links to
    Leaf {
        label: String,
        depth: usize,
        link: String,
    },
}

impl NavigationEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Group { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Self::Group { depth, .. } | Self::Leaf { depth, .. } => *depth,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    fn render_into(&self, out: &mut String) {
        let indent = INDENT.repeat(self.depth());
        // Writing to a String cannot fail
        let _ = match self {
            Self::Group { label, .. } => writeln!(out, "{indent}- {label}"),
            Self::Leaf { label, link, .. } => writeln!(out, "{indent}- [{label}]({link})"),
        };
    }
}

/// Ordered table of contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationDocument {
    pub entries: Vec<NavigationEntry>,
}

impl NavigationDocument {
    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);
        for entry in &self.entries {
            entry.render_into(&mut out);
        }
        out
    }

    /// Truncate-and-write the rendered document, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(paths::parent_dir(path)).for_write(path)?;
        fs::write(path, self.render()).for_write(path)
    }

    pub fn group_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_leaf()).count()
    }

    pub fn leaf_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_leaf()).count()
    }
}

/// Result of a scan: the document plus every path that could not be read
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub document: NavigationDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the navigation document for one input root
pub struct SummaryBuilder {
    input_root: PathBuf,
    exclusions: Arc<ExclusionSet>,
    source_extension: String,
    doc_extension: String,
    /// Relative path from the navigation document's directory to the output root
    link_prefix: String,
}

impl SummaryBuilder {
    pub fn new(input_root: impl Into<PathBuf>, exclusions: Arc<ExclusionSet>) -> Self {
        Self {
            input_root: input_root.into(),
            exclusions,
            source_extension: "sol".to_string(),
            doc_extension: "md".to_string(),
            link_prefix: String::new(),
        }
    }

    pub fn with_extensions(mut self, source: impl Into<String>, doc: impl Into<String>) -> Self {
        self.source_extension = source.into();
        self.doc_extension = doc.into();
        self
    }

    /// Compute link prefixes for a navigation document at `summary_file`
    /// pointing into `output_dir`.
    pub fn with_layout(mut self, summary_file: &Path, output_dir: &Path) -> Self {
        let rel = paths::relative(paths::parent_dir(summary_file), output_dir);
        self.link_prefix = paths::to_slash(&rel);
        self
    }

    /// Walk the input root. Never fails: unreadable paths become diagnostics.
    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        if self.exclusions.contains(&self.input_root) {
            debug!("Input root {} is excluded", self.input_root.display());
            return outcome;
        }

        let exclusions = Arc::clone(&self.exclusions);
        let walker = walk::sorted_walker(&self.input_root, move |path| {
            exclusions.contains(path)
        });

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let diag = walk::diagnostic(&err, &self.input_root);
                    warn!("Error scanning path {}", diag);
                    outcome.diagnostics.push(diag);
                    continue;
                }
            };

            let path = entry.path();
            let depth = entry.depth();
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());

            if let Some(nav) = self.entry_for(path, depth, is_dir) {
                debug!("{:?}", nav);
                outcome.document.entries.push(nav);
            }
        }

        outcome
    }

    fn entry_for(&self, path: &Path, depth: usize, is_dir: bool) -> Option<NavigationEntry> {
        if is_dir {
            return Some(NavigationEntry::Group {
                label: base_name(path),
                depth,
            });
        }

        if !self.is_documentable(path) {
            return None;
        }

        let label = path.file_stem()?.to_string_lossy().into_owned();
        Some(NavigationEntry::Leaf {
            label,
            depth,
            link: self.link_for(path),
        })
    }

    fn is_documentable(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.source_extension.as_str())
    }

    /// `<prefix>/<path relative to input root, doc extension>`
    pub fn link_for(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.input_root).unwrap_or(path);
        let page = paths::to_slash(&relative.with_extension(&self.doc_extension));
        if self.link_prefix.is_empty() {
            page
        } else {
            format!("{}/{}", self.link_prefix, page)
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "pragma solidity ^0.8.0;\n").unwrap();
    }

    fn builder(root: &Path, excluded: &[&str]) -> SummaryBuilder {
        let exclusions = Arc::new(ExclusionSet::from_lines(root, excluded.iter().copied()));
        SummaryBuilder::new(root, exclusions).with_layout(
            &root.join("docs/SUMMARY.md"),
            &root.join("docs/contracts"),
        )
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("A/X.sol"));
        touch(&root.join("A/Y.sol"));
        touch(&root.join("B.sol"));

        let outcome = builder(&root, &["A"]).scan();

        assert!(outcome.diagnostics.is_empty());
        assert_eq!(
            outcome.document.entries,
            vec![
                NavigationEntry::Group {
                    label: "contracts".to_string(),
                    depth: 0
                },
                NavigationEntry::Leaf {
                    label: "B".to_string(),
                    depth: 1,
                    link: "contracts/B.md".to_string()
                },
            ]
        );
        let rendered = outcome.document.render();
        assert!(!rendered.contains("[X]"));
        assert!(!rendered.contains("- A\n"));
    }

    #[test]
    fn test_excluded_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("lib/Math.sol"));
        touch(&root.join("lib/Strings.sol"));

        let outcome = builder(&root, &["lib/Math.sol"]).scan();
        let labels: Vec<&str> = outcome.document.entries.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["contracts", "lib", "Strings"]);
    }

    #[test]
    fn test_excluded_root_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("B.sol"));

        let exclusions = Arc::new(ExclusionSet::from_lines(temp_dir.path(), ["contracts"]));
        let outcome = SummaryBuilder::new(&root, exclusions).scan();
        assert!(outcome.document.entries.is_empty());
        assert_eq!(outcome.document.render(), "# Summary\n\n");
    }

    #[test]
    fn test_depth_tracks_nesting_and_order_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("token/erc20/Token.sol"));
        touch(&root.join("token/Base.sol"));
        touch(&root.join("Access.sol"));
        fs::write(root.join("README.txt"), "not a contract").unwrap();

        let outcome = builder(&root, &[]).scan();
        let shape: Vec<(&str, usize)> = outcome
            .document
            .entries
            .iter()
            .map(|e| (e.label(), e.depth()))
            .collect();

        assert_eq!(
            shape,
            vec![
                ("contracts", 0),
                ("Access", 1),
                ("token", 1),
                ("Base", 2),
                ("erc20", 2),
                ("Token", 3),
            ]
        );
        assert_eq!(outcome.document.group_count(), 3);
        assert_eq!(outcome.document.leaf_count(), 3);
    }

    #[test]
    fn test_render_format() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("token/Token.sol"));

        let rendered = builder(&root, &[]).scan().document.render();
        assert_eq!(
            rendered,
            "# Summary\n\n- contracts\n  - token\n    - [Token](contracts/token/Token.md)\n"
        );
    }

    #[test]
    fn test_link_is_derived_from_source_path() {
        let root = Path::new("box/contracts");
        let exclusions = Arc::new(ExclusionSet::default());
        let summary = SummaryBuilder::new(root, exclusions)
            .with_extensions("sol", "md")
            .with_layout(
                Path::new("docs/solidity/SUMMARY.md"),
                Path::new("docs/solidity/contracts"),
            );

        assert_eq!(
            summary.link_for(&root.join("token").join("ERC20.sol")),
            "contracts/token/ERC20.md"
        );
    }

    #[test]
    fn test_link_without_prefix_when_output_is_summary_dir() {
        let root = Path::new("src");
        let summary = SummaryBuilder::new(root, Arc::new(ExclusionSet::default()))
            .with_layout(Path::new("docs/SUMMARY.md"), Path::new("docs"));
        assert_eq!(summary.link_for(&root.join("Vault.sol")), "Vault.md");
    }

    #[test]
    fn test_custom_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("src");
        touch(&root.join("Pool.vy"));
        touch(&root.join("Pool.sol"));

        let outcome = builder(&root, &[]).with_extensions("vy", "markdown").scan();
        let leaves: Vec<&NavigationEntry> =
            outcome.document.entries.iter().filter(|e| e.is_leaf()).collect();
        assert_eq!(leaves.len(), 1);
        assert_eq!(
            leaves[0],
            &NavigationEntry::Leaf {
                label: "Pool".to_string(),
                depth: 1,
                link: "contracts/Pool.markdown".to_string()
            }
        );
    }

    #[test]
    fn test_missing_root_is_a_diagnostic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("absent");

        let outcome = builder(&root, &[]).scan();
        assert!(outcome.document.entries.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_keeps_siblings() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("contracts");
        touch(&root.join("locked/Secret.sol"));
        touch(&root.join("open/Public.sol"));

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Root ignores permission bits; nothing to observe then.
        let readable = fs::read_dir(&locked).is_ok();

        let outcome = builder(&root, &[]).scan();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let labels: Vec<&str> = outcome.document.entries.iter().map(|e| e.label()).collect();
        assert!(labels.contains(&"Public"));
        if !readable {
            assert!(!labels.contains(&"Secret"));
            assert_eq!(outcome.diagnostics.len(), 1);
            assert_eq!(outcome.diagnostics[0].path, locked);
        }
    }

    #[test]
    fn test_write_creates_parent_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("docs/solidity/SUMMARY.md");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "stale content that is longer than the new one").unwrap();

        NavigationDocument::default().write(&target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "# Summary\n\n");
    }
}
