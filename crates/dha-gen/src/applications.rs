//! DHA applications generation and the authoritative statistics scan.
//!
//! The generator consumes the finished registry for referential sampling;
//! referential integrity is deliberately broken for ~5% of rows (orphans).
//! Inline draws decide each row's defects, but the reported statistics come
//! from `scan_issues`, which recomputes every count from the finished table.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

use dha_model::{
    ApplicationIssues, ApplicationRecord, ApplicationStatus, ApplicationType, GeneratorConfig,
    PersonRecord, Province, SubmissionChannel, branch_directory,
};

use crate::plan::{pick, pick_copy};
use crate::progress::row_bar;
use crate::said;

const VALID_REFERENCE_P: f64 = 0.95;
const MATCHING_BRANCH_P: f64 = 0.9;
const VALID_DURATION_P: f64 = 0.95;
const ORDERED_DATES_P: f64 = 0.95;
const APPLICATION_WINDOW_DAYS: i64 = 1095;

/// Generate the applications table against a finished registry.
pub fn generate_applications<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
    registry: &[PersonRecord],
) -> Vec<ApplicationRecord> {
    let rows = config.application_rows;
    // Province lookup by identifier instead of a table scan per row.
    let provinces_by_id: HashMap<&str, Province> = registry
        .iter()
        .map(|person| (person.sa_id_number.as_str(), person.province))
        .collect();
    let registry_ids: Vec<&str> = registry.iter().map(|p| p.sa_id_number.as_str()).collect();
    let branch_codes = draw_branch_codes(rng);

    let bar = row_bar(rows as u64, "applications", config.show_progress);
    let mut records = Vec::with_capacity(rows);
    for _ in 0..rows {
        records.push(generate_application(
            rng,
            config,
            &registry_ids,
            &provinces_by_id,
            &branch_codes,
        ));
        bar.inc(1);
    }
    bar.finish_and_clear();
    debug!(rows, "applications generated");
    records
}

fn generate_application<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
    registry_ids: &[&str],
    provinces_by_id: &HashMap<&str, Province>,
    branch_codes: &HashMap<&'static str, String>,
) -> ApplicationRecord {
    // Opaque token; collisions are allowed and reportable.
    let application_id = format!("APP{}", rng.random_range(100_000..=999_999));

    let (sa_id_number, province) =
        if !registry_ids.is_empty() && rng.random_bool(VALID_REFERENCE_P) {
            let id = *pick(rng, registry_ids);
            let province = provinces_by_id
                .get(id)
                .copied()
                .unwrap_or_else(|| pick_copy(rng, &Province::ALL));
            (id.to_string(), province)
        } else {
            // Orphan path: a fresh identifier the registry has never issued.
            (draw_orphan_id(rng), pick_copy(rng, &Province::ALL))
        };

    let application_type = pick_copy(rng, &ApplicationType::ALL);
    let application_date =
        config.today - Duration::days(rng.random_range(0..=APPLICATION_WINDOW_DAYS));
    let application_status = draw_status(rng);

    let dha_branch_name = if rng.random_bool(MATCHING_BRANCH_P) {
        (*pick(rng, province.branches())).to_string()
    } else {
        // Deliberate mismatch: a branch from some other province.
        let other = draw_other_province(rng, province);
        (*pick(rng, other.branches())).to_string()
    };
    let branch_code = branch_codes
        .get(dha_branch_name.as_str())
        .cloned()
        .unwrap_or_else(|| format!("{:04}", rng.random_range(1000..=9999)));

    let submission_channel = pick_copy(rng, &SubmissionChannel::ALL);
    let processing_days = draw_processing_days(rng);
    let last_updated_date = draw_last_updated(rng, application_date, processing_days);

    ApplicationRecord {
        application_id,
        sa_id_number,
        application_type,
        application_date,
        application_status,
        province,
        dha_branch_name,
        branch_code,
        submission_channel,
        processing_days,
        last_updated_date,
    }
}

/// Recompute the authoritative issue statistics from the finished table.
///
/// Duplicate counting deliberately conflates planned duplicate identifiers
/// with incidental orphan collisions: every row beyond the first occurrence
/// of its identifier counts.
pub fn scan_issues(applications: &[ApplicationRecord]) -> ApplicationIssues {
    let mut issues = ApplicationIssues::default();
    let mut id_counts: HashMap<&str, usize> = HashMap::new();
    let mut valid_days_sum: i64 = 0;
    let mut valid_days_rows: usize = 0;

    for record in applications {
        *id_counts.entry(record.sa_id_number.as_str()).or_insert(0) += 1;
        if record.application_status.is_none() {
            issues.missing_status += 1;
        }
        if record.has_province_mismatch() {
            issues.province_mismatches += 1;
        }
        if record.has_invalid_processing_days() {
            issues.invalid_processing_days += 1;
        } else {
            valid_days_sum += i64::from(record.processing_days);
            valid_days_rows += 1;
        }
        if record.has_inverted_dates() {
            issues.invalid_dates += 1;
        }
    }

    issues.duplicate_applications = id_counts
        .values()
        .filter(|&&count| count > 1)
        .map(|&count| count - 1)
        .sum();
    issues.mean_valid_processing_days =
        (valid_days_rows > 0).then(|| valid_days_sum as f64 / valid_days_rows as f64);
    issues
}

/// One 4-digit code per branch, assigned once per run and reused by every
/// row referencing that branch.
fn draw_branch_codes<R: Rng>(rng: &mut R) -> HashMap<&'static str, String> {
    branch_directory()
        .map(|(_, branch)| (branch, format!("{:04}", rng.random_range(100..=9999))))
        .collect()
}

/// Identifier guaranteed plausible but almost certainly registry-absent.
fn draw_orphan_id<R: Rng>(rng: &mut R) -> String {
    let year = rng.random_range(1980..=2000);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    let birth = NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 exists in every month");
    said::draw(rng, birth)
}

/// Status from the five fixed values plus an explicit absent option, each
/// equally likely. Missing status is a designed outcome, not an accident.
fn draw_status<R: Rng>(rng: &mut R) -> Option<ApplicationStatus> {
    match rng.random_range(0..=ApplicationStatus::ALL.len()) {
        idx if idx < ApplicationStatus::ALL.len() => Some(ApplicationStatus::ALL[idx]),
        _ => None,
    }
}

fn draw_other_province<R: Rng>(rng: &mut R, province: Province) -> Province {
    loop {
        let candidate = pick_copy(rng, &Province::ALL);
        if candidate != province {
            return candidate;
        }
    }
}

/// [5, 30] normally; negative or [1000, 5000] on the invalid path.
fn draw_processing_days<R: Rng>(rng: &mut R) -> i32 {
    if rng.random_bool(VALID_DURATION_P) {
        rng.random_range(5..=30)
    } else if rng.random_bool(0.5) {
        rng.random_range(-10..=-1)
    } else {
        rng.random_range(1000..=5000)
    }
}

/// On/after the application date, offset by at most the processing
/// duration (30 days when non-positive); strictly before it on the
/// inverted path.
fn draw_last_updated<R: Rng>(
    rng: &mut R,
    application_date: NaiveDate,
    processing_days: i32,
) -> NaiveDate {
    if rng.random_bool(ORDERED_DATES_P) {
        let cap = if processing_days > 0 {
            i64::from(processing_days)
        } else {
            30
        };
        application_date + Duration::days(rng.random_range(0..=cap))
    } else {
        application_date - Duration::days(rng.random_range(1..=30))
    }
}
