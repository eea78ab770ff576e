pub mod error;

pub use error::{Diagnostic, DocifyError, Result, ResultExt};
