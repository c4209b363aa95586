//! File writers for the two tables and the run summary.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::info;

use dha_model::{ApplicationRecord, IssueSummary, PersonRecord};

use crate::error::{ReportError, Result};

pub const REGISTRY_FILE: &str = "population_registry.csv";
pub const APPLICATIONS_FILE: &str = "dha_applications.csv";
const SUMMARY_FILE: &str = "generation_summary.json";
const BIG_DATA_PREFIX: &str = "big_data_";

/// Registry CSV filename, with the big-data prefix when requested.
pub fn registry_filename(big_data: bool) -> String {
    prefixed(REGISTRY_FILE, big_data)
}

/// Applications CSV filename, with the big-data prefix when requested.
pub fn application_filename(big_data: bool) -> String {
    prefixed(APPLICATIONS_FILE, big_data)
}

fn prefixed(name: &str, big_data: bool) -> String {
    if big_data {
        format!("{BIG_DATA_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

/// Write the population registry to `<dir>/<filename>`.
pub fn write_registry_csv(
    dir: &Path,
    records: &[PersonRecord],
    big_data: bool,
) -> Result<PathBuf> {
    let path = ensure_dir(dir)?.join(registry_filename(big_data));
    write_rows(&path, records)?;
    info!(path = %path.display(), rows = records.len(), "registry csv written");
    Ok(path)
}

/// Write the applications table to `<dir>/<filename>`.
pub fn write_applications_csv(
    dir: &Path,
    records: &[ApplicationRecord],
    big_data: bool,
) -> Result<PathBuf> {
    let path = ensure_dir(dir)?.join(application_filename(big_data));
    write_rows(&path, records)?;
    info!(path = %path.display(), rows = records.len(), "applications csv written");
    Ok(path)
}

/// Write the combined issue statistics as pretty-printed JSON.
pub fn write_summary_json(dir: &Path, summary: &IssueSummary, big_data: bool) -> Result<PathBuf> {
    let path = ensure_dir(dir)?.join(prefixed(SUMMARY_FILE, big_data));
    let file = File::create(&path).map_err(|source| ReportError::WriteJson {
        path: path.clone(),
        source,
    })?;
    serde_json::to_writer_pretty(file, summary).map_err(|source| ReportError::WriteJson {
        path: path.clone(),
        source: source.into(),
    })?;
    info!(path = %path.display(), "summary json written");
    Ok(path)
}

fn write_rows<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| ReportError::WriteCsv {
        path: path.to_path_buf(),
        source,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|source| ReportError::WriteCsv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| ReportError::WriteCsv {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<&Path> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dha_model::{
        APPLICATION_COLUMNS, ApplicationStatus, ApplicationType, Gender, Province,
        REGISTRY_COLUMNS, SubmissionChannel,
    };
    use tempfile::TempDir;

    fn person() -> PersonRecord {
        PersonRecord {
            sa_id_number: "9001010123049".to_string(),
            first_name: "Lerato".to_string(),
            last_name: "Dlamini".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: Gender::Female,
            citizenship_status: "South African".to_string(),
            province: Province::Gauteng,
            city: Some("Johannesburg".to_string()),
            street_address: None,
            postal_code: Some("2000".to_string()),
            cell_number: Some("+27821234567".to_string()),
            record_created_date: NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
        }
    }

    fn application() -> ApplicationRecord {
        ApplicationRecord {
            application_id: "APP123456".to_string(),
            sa_id_number: "9001010123049".to_string(),
            application_type: ApplicationType::IdCard,
            application_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            application_status: Some(ApplicationStatus::InProgress),
            province: Province::Gauteng,
            dha_branch_name: "Sandton".to_string(),
            branch_code: "0042".to_string(),
            submission_channel: SubmissionChannel::MobileUnit,
            processing_days: 14,
            last_updated_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        }
    }

    #[test]
    fn registry_csv_round_trips_with_expected_header() {
        let dir = TempDir::new().unwrap();
        let path = write_registry_csv(dir.path(), &[person()], false).unwrap();
        assert!(path.ends_with(REGISTRY_FILE));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(header, REGISTRY_COLUMNS);

        let rows: Vec<PersonRecord> = reader.deserialize().collect::<csv::Result<_>>().unwrap();
        assert_eq!(rows, vec![person()]);
    }

    #[test]
    fn absent_values_render_as_empty_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_registry_csv(dir.path(), &[person()], false).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        // street_address is None between city and postal_code
        assert!(data_line.contains("Johannesburg,,2000"));
        assert!(data_line.contains("1990-01-01"));
    }

    #[test]
    fn applications_csv_round_trips_with_expected_header() {
        let dir = TempDir::new().unwrap();
        let path = write_applications_csv(dir.path(), &[application()], false).unwrap();
        assert!(path.ends_with(APPLICATIONS_FILE));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(header, APPLICATION_COLUMNS);

        let rows: Vec<ApplicationRecord> =
            reader.deserialize().collect::<csv::Result<_>>().unwrap();
        assert_eq!(rows, vec![application()]);
    }

    #[test]
    fn big_data_mode_prefixes_filenames() {
        assert_eq!(registry_filename(true), "big_data_population_registry.csv");
        assert_eq!(application_filename(false), "dha_applications.csv");
        let dir = TempDir::new().unwrap();
        let path = write_applications_csv(dir.path(), &[application()], true).unwrap();
        assert!(path.ends_with("big_data_dha_applications.csv"));
    }

    #[test]
    fn summary_json_is_valid_and_reloadable() {
        let dir = TempDir::new().unwrap();
        let summary = IssueSummary::default();
        let path = write_summary_json(dir.path(), &summary, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let round: IssueSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(round, summary);
    }

    #[test]
    fn output_directory_is_created_on_demand() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("data");
        let path = write_registry_csv(&nested, &[person()], false).unwrap();
        assert!(path.exists());
    }
}
