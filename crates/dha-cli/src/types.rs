use std::path::PathBuf;

use dha_model::IssueSummary;

/// Outcome of one `generate` invocation, consumed by the summary printer.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    pub registry_rows: usize,
    pub application_rows: usize,
    pub summary: IssueSummary,
    /// Files written, in write order. Empty on a dry run.
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}
