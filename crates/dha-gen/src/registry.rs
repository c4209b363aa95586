//! Population registry generation.
//!
//! One pass over the row indices with no cross-record state besides the
//! identifier-uniqueness set, then a separate pass that deliberately breaks
//! that uniqueness for the planned duplicate indices.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

use dha_model::{Gender, GeneratorConfig, PersonRecord, Province, RegistryIssues};

use crate::plan::{FormatQuirk, MissingField, RegistryPlan, pick, pick_copy};
use crate::pools;
use crate::progress::row_bar;
use crate::said;

const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1944..=2006;
const CITIZENSHIP: &str = "South African";
const CELL_PREFIXES: [&str; 2] = ["+27", "0"];

/// Generate the population registry and tally realized defect counts.
pub fn generate_registry<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> (Vec<PersonRecord>, RegistryIssues) {
    let rows = config.population_rows;
    let plan = RegistryPlan::draw(rng, rows, &config.rates);
    let mut issues = RegistryIssues::default();
    let mut issued: HashSet<String> = HashSet::with_capacity(rows);
    let mut records = Vec::with_capacity(rows);

    let bar = row_bar(rows as u64, "registry", config.show_progress);
    for index in 0..rows {
        records.push(generate_person(rng, config, &plan, index, &mut issued, &mut issues));
        bar.inc(1);
    }
    bar.finish_and_clear();

    apply_duplicates(rng, &plan, &mut records, &mut issues);
    debug!(
        rows,
        duplicates = issues.duplicates,
        missing = issues.missing_values,
        "registry generated"
    );
    (records, issues)
}

fn generate_person<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
    plan: &RegistryPlan,
    index: usize,
    issued: &mut HashSet<String>,
    issues: &mut RegistryIssues,
) -> PersonRecord {
    let date_of_birth = draw_birth_date(rng);
    let gender = pick_copy(rng, &Gender::ALL);

    // Uniqueness pass: redraw the sequence until the identifier is fresh.
    // The deliberate duplicate pass runs later and is a distinct step.
    let mut sa_id_number = said::draw(rng, date_of_birth);
    while issued.contains(&sa_id_number) {
        sa_id_number = said::draw(rng, date_of_birth);
    }
    issued.insert(sa_id_number.clone());

    let missing_field = plan.missing.get(&index).copied();
    let quirk = plan.formatting.get(&index).copied();

    let mut first_name = (*pick(rng, pools::FIRST_NAMES)).to_string();
    let last_name = (*pick(rng, pools::LAST_NAMES)).to_string();
    if quirk == Some(FormatQuirk::NameCase) {
        first_name = if rng.random_bool(0.5) {
            first_name.to_uppercase()
        } else {
            first_name.to_lowercase()
        };
    }

    let province = pick_copy(rng, &Province::ALL);
    let city = (missing_field != Some(MissingField::City))
        .then(|| (*pick(rng, pools::CITIES)).to_string());
    let street_address = (missing_field != Some(MissingField::StreetAddress))
        .then(|| draw_street_address(rng));

    let postal_code = if plan.invalid_postal.contains(&index) {
        issues.invalid_postal_codes += 1;
        Some(draw_invalid_postal_code(rng))
    } else {
        Some(format!("{:04}", rng.random_range(1..=9999)))
    };
    let postal_code = (missing_field != Some(MissingField::PostalCode)).then_some(postal_code).flatten();

    let mut cell_number = format!(
        "{}{}",
        pick(rng, &CELL_PREFIXES),
        rng.random_range(100_000_000u32..=999_999_999)
    );
    if quirk == Some(FormatQuirk::PhoneFormat) {
        cell_number = toggle_cell_prefix(&cell_number);
    }
    let cell_number = (missing_field != Some(MissingField::CellNumber)).then_some(cell_number);

    if missing_field.is_some() {
        issues.missing_values += 1;
    }
    if quirk.is_some() {
        issues.inconsistent_formatting += 1;
    }

    let record_created_date = if plan.future_dates.contains(&index) {
        issues.future_dates += 1;
        config.today + Duration::days(rng.random_range(1..=30))
    } else {
        draw_created_date(rng, date_of_birth, config.today)
    };

    PersonRecord {
        sa_id_number,
        first_name,
        last_name,
        date_of_birth,
        gender,
        citizenship_status: CITIZENSHIP.to_string(),
        province,
        city,
        street_address,
        postal_code,
        cell_number,
        record_created_date,
    }
}

/// Overwrite each planned index's identifier with another record's.
///
/// Runs after the whole table exists so every record is a valid source.
/// Indices are visited in ascending order to keep the rng stream stable.
fn apply_duplicates<R: Rng>(
    rng: &mut R,
    plan: &RegistryPlan,
    records: &mut [PersonRecord],
    issues: &mut RegistryIssues,
) {
    if records.len() < 2 {
        return;
    }
    let mut indices: Vec<usize> = plan.duplicates.iter().copied().collect();
    indices.sort_unstable();
    for target in indices {
        let source = loop {
            let candidate = rng.random_range(0..records.len());
            if candidate != target {
                break candidate;
            }
        };
        records[target].sa_id_number = records[source].sa_id_number.clone();
        issues.duplicates += 1;
    }
}

/// Uniform birth date; day capped at 28 so every month/day pair is valid.
fn draw_birth_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let year = rng.random_range(BIRTH_YEAR_RANGE);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 exists in every month")
}

/// Created date in [birth + 1 year, today].
fn draw_created_date<R: Rng>(rng: &mut R, date_of_birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let earliest = date_of_birth + Duration::days(365);
    let span = (today - earliest).num_days().max(0);
    earliest + Duration::days(rng.random_range(0..=span))
}

fn draw_street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.random_range(1..=999),
        pick(rng, pools::STREET_NAMES),
        pick(rng, pools::STREET_TYPES)
    )
}

/// A postal code that breaks the 4-digit format: wrong length, letters,
/// or empty.
fn draw_invalid_postal_code<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..4) {
        0 => rng.random_range(100..=999).to_string(),
        1 => rng.random_range(10_000..=99_999).to_string(),
        2 => "ABCD".to_string(),
        _ => String::new(),
    }
}

fn toggle_cell_prefix(cell: &str) -> String {
    if let Some(rest) = cell.strip_prefix("+27") {
        format!("0{rest}")
    } else if let Some(rest) = cell.strip_prefix('0') {
        format!("+27{rest}")
    } else {
        cell.to_string()
    }
}
