//! Shared directory walker.
//!
//! Unlike source scanning for analysis, documentation walks must see every
//! file: hidden files and ignore files are not honoured, symlinks are not
//! followed, and siblings are visited in file-name order.

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::types::Diagnostic;

/// Build a sorted, unfiltered pre-order walker rooted at `root`.
///
/// `prune` is consulted for every entry below the root; returning `true`
/// drops the entry and, for directories, its whole subtree.
pub fn sorted_walker<F>(root: &Path, prune: F) -> Walk
where
    F: Fn(&Path) -> bool + Send + Sync + 'static,
{
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false) // Security: prevent symlink traversal attacks
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !prune(entry.path()))
        .build()
}

/// Turn a walker error into a per-path diagnostic.
pub fn diagnostic(err: &ignore::Error, fallback: &Path) -> Diagnostic {
    let path = error_path(err).unwrap_or_else(|| fallback.to_path_buf());
    Diagnostic::new(path, io_message(err))
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

fn io_message(err: &ignore::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_is_sorted_and_includes_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.sol"), "").unwrap();
        fs::write(root.join(".hidden.sol"), "").unwrap();
        fs::write(root.join("a.sol"), "").unwrap();
        fs::write(root.join(".gitignore"), "*.sol\n").unwrap();

        let names: Vec<String> = sorted_walker(root, |_| false)
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() == 1)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec![".gitignore", ".hidden.sol", "a.sol", "b.sol"]);
    }

    #[test]
    fn test_prune_skips_subtree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join("skip/deep")).unwrap();
        fs::write(root.join("skip/deep/x.sol"), "").unwrap();
        fs::write(root.join("keep.sol"), "").unwrap();

        let skip = root.join("skip");
        let visited: Vec<PathBuf> = sorted_walker(&root, move |p| p == skip)
            .filter_map(|e| e.ok())
            .map(|e| e.path().to_path_buf())
            .collect();

        assert_eq!(visited, vec![root.clone(), root.join("keep.sol")]);
    }

    #[test]
    fn test_missing_root_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let errors: Vec<Diagnostic> = sorted_walker(&missing, |_| false)
            .filter_map(|e| e.err())
            .map(|e| diagnostic(&e, &missing))
            .collect();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, missing);
    }
}
