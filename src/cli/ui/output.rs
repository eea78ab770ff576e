use console::style;

use crate::docgen::PipelineReport;
use crate::types::Diagnostic;

/// Styled terminal messages. Quiet mode keeps errors only.
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn skipped(&self, diag: &Diagnostic) {
        if !self.quiet {
            println!(
                "  {} {}",
                style(diag.path.display()).dim(),
                style(&diag.message).yellow()
            );
        }
    }

    /// Final build summary
    pub fn report(&self, report: &PipelineReport) {
        self.success(&format!(
            "Documented {} module(s) in {} group(s); normalized {} page(s)",
            report.leaves,
            report.groups,
            report.normalized.total()
        ));

        if !report.is_complete() {
            self.warning(&format!(
                "{} path(s) skipped:",
                report.diagnostics.len()
            ));
            for diag in &report.diagnostics {
                self.skipped(diag);
            }
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(false)
    }
}
