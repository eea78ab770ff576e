//! Documentation tree assembly
//!
//! - [`exclusion`]: paths skipped while scanning
//! - [`summary`]: navigation document (SUMMARY.md)
//! - [`overview`]: overview page (README.md) and `.gitbook.yaml`
//! - [`tool`]: external extractor invocation
//! - [`normalize`]: blank-line normalization of rendered pages
//! - [`pipeline`]: the stages above, in order

pub mod exclusion;
pub mod normalize;
pub mod overview;
pub mod paths;
pub mod pipeline;
pub mod summary;
pub mod tool;
mod walk;

pub use exclusion::ExclusionSet;
pub use normalize::{NormalizeOutcome, normalize_markdown, normalize_tree};
pub use overview::{StructureDescriptor, write_overview, write_structure_descriptor};
pub use pipeline::{Pipeline, PipelineReport};
pub use summary::{NavigationDocument, NavigationEntry, ScanOutcome, SummaryBuilder};
pub use tool::{ExtractRequest, Extractor, SolidityDocgen};
