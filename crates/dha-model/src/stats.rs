//! Injected-issue statistics reported alongside the generated tables.

use serde::{Deserialize, Serialize};

/// Realized defect counts for the population registry.
///
/// Counts come from the generator's own tallies; they can undershoot the
/// requested `floor(rows x rate)` only through index-space truncation at
/// very small row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIssues {
    pub duplicates: usize,
    pub missing_values: usize,
    pub invalid_postal_codes: usize,
    pub future_dates: usize,
    pub inconsistent_formatting: usize,
}

impl RegistryIssues {
    pub fn total(&self) -> usize {
        self.duplicates
            + self.missing_values
            + self.invalid_postal_codes
            + self.future_dates
            + self.inconsistent_formatting
    }
}

/// Authoritative defect counts for the applications table, recomputed by
/// scanning the finished rows rather than trusting inline generation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationIssues {
    /// Rows whose identifier appears more than once, beyond the first
    /// occurrence of each. Incidental orphan collisions are included.
    pub duplicate_applications: usize,
    pub missing_status: usize,
    pub province_mismatches: usize,
    pub invalid_processing_days: usize,
    pub invalid_dates: usize,
    /// Mean processing duration over rows with a plausible duration only;
    /// `None` when no such row exists.
    pub mean_valid_processing_days: Option<f64>,
}

impl ApplicationIssues {
    pub fn total(&self) -> usize {
        self.duplicate_applications
            + self.missing_status
            + self.province_mismatches
            + self.invalid_processing_days
            + self.invalid_dates
    }
}

/// Combined statistics for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub registry: RegistryIssues,
    pub applications: ApplicationIssues,
    /// `|application identifiers - registry identifiers|`, recomputed from
    /// the final tables by set difference.
    pub orphan_records: usize,
}

impl IssueSummary {
    pub fn total_issues(&self) -> usize {
        self.registry.total() + self.applications.total() + self.orphan_records
    }
}
