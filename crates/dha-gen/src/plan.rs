//! Anomaly planning: which record indices receive which defect.
//!
//! Index sets are drawn up front so the per-record generation loop does an
//! O(1) membership check instead of a random draw, which makes realized
//! counts exact (`floor(rows x rate)`) instead of merely expected.
//! Categories draw independently, so one record may carry several defects.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::index;

use dha_model::IssueRates;

/// Which nullable registry field a missing-value defect hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingField {
    City,
    StreetAddress,
    PostalCode,
    CellNumber,
}

impl MissingField {
    pub const ALL: [MissingField; 4] = [
        MissingField::City,
        MissingField::StreetAddress,
        MissingField::PostalCode,
        MissingField::CellNumber,
    ];
}

/// Which formatting quirk an inconsistent-formatting defect applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatQuirk {
    /// First name forced to all-upper or all-lower case.
    NameCase,
    /// Cell number toggled between `0...` and `+27...` forms.
    PhoneFormat,
}

impl FormatQuirk {
    pub const ALL: [FormatQuirk; 2] = [FormatQuirk::NameCase, FormatQuirk::PhoneFormat];
}

/// Pre-drawn defect assignment for one registry generation run.
#[derive(Debug, Clone, Default)]
pub struct RegistryPlan {
    /// Indices whose identifier is overwritten after generation.
    pub duplicates: HashSet<usize>,
    /// Index -> field nulled on that record.
    pub missing: HashMap<usize, MissingField>,
    /// Indices receiving a malformed postal code.
    pub invalid_postal: HashSet<usize>,
    /// Indices whose created date lands in the future.
    pub future_dates: HashSet<usize>,
    /// Index -> formatting quirk applied to that record.
    pub formatting: HashMap<usize, FormatQuirk>,
}

impl RegistryPlan {
    /// Draw a plan for `rows` records at the configured rates.
    ///
    /// Formatting runs at twice the invalid rate; future dates and invalid
    /// postal codes each run at the invalid rate.
    pub fn draw<R: Rng>(rng: &mut R, rows: usize, rates: &IssueRates) -> Self {
        let duplicates = sample_indices(rng, rows, rate_count(rows, rates.duplicate))
            .into_iter()
            .collect();
        let missing = sample_indices(rng, rows, rate_count(rows, rates.missing))
            .into_iter()
            .map(|idx| (idx, pick_copy(rng, &MissingField::ALL)))
            .collect();
        let invalid_postal = sample_indices(rng, rows, rate_count(rows, rates.invalid))
            .into_iter()
            .collect();
        let future_dates = sample_indices(rng, rows, rate_count(rows, rates.invalid))
            .into_iter()
            .collect();
        let formatting = sample_indices(rng, rows, rate_count(rows, rates.invalid * 2.0))
            .into_iter()
            .map(|idx| (idx, pick_copy(rng, &FormatQuirk::ALL)))
            .collect();
        Self {
            duplicates,
            missing,
            invalid_postal,
            future_dates,
            formatting,
        }
    }
}

/// `floor(rows x rate)` as a draw size.
pub fn rate_count(rows: usize, rate: f64) -> usize {
    (rows as f64 * rate).floor() as usize
}

/// Draw `count` distinct indices from `[0, rows)` without replacement.
///
/// The draw size is clamped to `rows`; asking for more distinct indices
/// than exist is a caller bug the planner absorbs rather than panics on.
/// A zero count returns an empty vector without touching the rng.
pub fn sample_indices<R: Rng>(rng: &mut R, rows: usize, count: usize) -> Vec<usize> {
    let count = count.min(rows);
    if count == 0 {
        return Vec::new();
    }
    index::sample(rng, rows, count).into_vec()
}

/// Uniform pick from a non-empty slice of `Copy` items.
pub(crate) fn pick_copy<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Uniform pick from a non-empty slice, by reference.
pub(crate) fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
