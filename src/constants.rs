//! Global Constants
//!
//! Fixed text and layout values used by the generated documents and the
//! extraction tool launcher.

/// Navigation document layout
pub mod summary {
    /// First line of the navigation document, followed by a blank line
    pub const HEADER: &str = "# Summary\n\n";

    /// One nesting level
    pub const INDENT: &str = "  ";
}

/// Markdown normalization
pub mod normalize {
    /// Separator placed between consecutive non-blank lines
    pub const SEPARATOR: &str = "\n\n";
}

/// GitBook structure descriptor
pub mod structure {
    /// Project root declared in the descriptor
    pub const ROOT: &str = "./";
}

/// Extraction tool layout under the tool directory
pub mod tool {
    /// Entry script of the extraction tool, relative to the tool directory
    pub const CLI_SCRIPT: &[&str] = &["solidity-docgen", "dist", "cli.js"];

    /// Compiler module the extraction tool loads, relative to the tool directory
    pub const COMPILER_MODULE: &str = "solc";

    /// Files that make a directory resolvable as a Node module
    pub const MODULE_MARKERS: &[&str] = &["package.json", "index.js"];
}
