//! Overview page (README.md) and GitBook structure descriptor.
//!
//! Both are front matter for the published tree, so any failure to write
//! them is fatal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::paths;
use crate::constants::structure::ROOT;
use crate::types::{Result, ResultExt};

/// Render the overview page for `title`, linking to `navigation_link`.
pub fn render_overview(title: &str, navigation_link: &str) -> String {
    format!(
        "# {title}\n\
         \n\
         ## Overview\n\
         \n\
         This documentation covers every contract in the project.\n\
         It is meant to help developers understand the structure,\n\
         usage, and functionality of each contract.\n\
         \n\
         ## Table of Contents\n\
         \n\
         - [SUMMARY]({navigation_link})\n"
    )
}

/// Link from the overview's directory to the navigation document.
///
/// Links that stay inside the directory get an explicit `./`.
pub fn navigation_link(overview_path: &Path, navigation_path: &Path) -> String {
    let rel = paths::relative(paths::parent_dir(overview_path), navigation_path);
    let link = paths::to_slash(&rel);
    if link.starts_with("..") {
        link
    } else {
        format!("./{link}")
    }
}

/// Write the overview page, creating parent directories as needed.
pub fn write_overview(overview_path: &Path, navigation_path: &Path, title: &str) -> Result<()> {
    let link = navigation_link(overview_path, navigation_path);
    fs::create_dir_all(paths::parent_dir(overview_path)).for_write(overview_path)?;
    fs::write(overview_path, render_overview(title, &link)).for_write(overview_path)?;
    info!("Generated README at {}", overview_path.display());
    Ok(())
}

/// `.gitbook.yaml` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDescriptor {
    pub root: String,
    pub structure: Structure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub readme: String,
    pub summary: String,
}

impl StructureDescriptor {
    pub fn new(readme: &Path, summary: &Path) -> Self {
        Self {
            root: ROOT.to_string(),
            structure: Structure {
                readme: paths::to_slash(readme),
                summary: paths::to_slash(summary),
            },
        }
    }
}

/// Overwrite the structure descriptor at `path`.
pub fn write_structure_descriptor(path: &Path, readme: &Path, summary: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(&StructureDescriptor::new(readme, summary))?;
    fs::create_dir_all(paths::parent_dir(path)).for_write(path)?;
    fs::write(path, yaml).for_write(path)
}
