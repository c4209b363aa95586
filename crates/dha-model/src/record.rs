//! Row types for the two generated tables.
//!
//! Field order is the exported CSV column order, and `Option` fields render
//! as empty cells. Absent values are deliberate output states, not errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ApplicationStatus, ApplicationType, Gender, Province, SubmissionChannel};

/// Column order of the population registry export.
pub const REGISTRY_COLUMNS: [&str; 12] = [
    "sa_id_number",
    "first_name",
    "last_name",
    "date_of_birth",
    "gender",
    "citizenship_status",
    "province",
    "city",
    "street_address",
    "postal_code",
    "cell_number",
    "record_created_date",
];

/// Column order of the applications export.
pub const APPLICATION_COLUMNS: [&str; 11] = [
    "application_id",
    "sa_id_number",
    "application_type",
    "application_date",
    "application_status",
    "province",
    "dha_branch_name",
    "branch_code",
    "submission_channel",
    "processing_days",
    "last_updated_date",
];

/// One population-registry row.
///
/// The first six digits of `sa_id_number` always encode `date_of_birth` as
/// `YYMMDD`, except for rows rewritten by the deliberate duplicate pass,
/// whose identifier belongs to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub sa_id_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub citizenship_status: String,
    pub province: Province,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub cell_number: Option<String>,
    pub record_created_date: NaiveDate,
}

/// One DHA applications row.
///
/// `sa_id_number` should reference a `PersonRecord`, but a configured
/// fraction of rows deliberately dangle (orphans).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: String,
    pub sa_id_number: String,
    pub application_type: ApplicationType,
    pub application_date: NaiveDate,
    pub application_status: Option<ApplicationStatus>,
    pub province: Province,
    pub dha_branch_name: String,
    pub branch_code: String,
    pub submission_channel: SubmissionChannel,
    pub processing_days: i32,
    pub last_updated_date: NaiveDate,
}

impl ApplicationRecord {
    /// Processing duration outside the plausible [0, 100] day window.
    pub fn has_invalid_processing_days(&self) -> bool {
        self.processing_days < 0 || self.processing_days > 100
    }

    /// Last update recorded before the application was lodged.
    pub fn has_inverted_dates(&self) -> bool {
        self.last_updated_date < self.application_date
    }

    /// Branch located outside the record's own province.
    pub fn has_province_mismatch(&self) -> bool {
        !self.province.has_branch(&self.dha_branch_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> ApplicationRecord {
        ApplicationRecord {
            application_id: "APP123456".to_string(),
            sa_id_number: "9001014800086".to_string(),
            application_type: ApplicationType::Passport,
            application_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            application_status: Some(ApplicationStatus::Pending),
            province: Province::Gauteng,
            dha_branch_name: "Pretoria".to_string(),
            branch_code: "0412".to_string(),
            submission_channel: SubmissionChannel::Online,
            processing_days: 12,
            last_updated_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    #[test]
    fn well_formed_application_has_no_flags() {
        let record = sample_application();
        assert!(!record.has_invalid_processing_days());
        assert!(!record.has_inverted_dates());
        assert!(!record.has_province_mismatch());
    }

    #[test]
    fn negative_and_extreme_durations_are_invalid() {
        let mut record = sample_application();
        record.processing_days = -5;
        assert!(record.has_invalid_processing_days());
        record.processing_days = 1500;
        assert!(record.has_invalid_processing_days());
        record.processing_days = 100;
        assert!(!record.has_invalid_processing_days());
    }

    #[test]
    fn inverted_dates_flagged_regardless_of_status() {
        let mut record = sample_application();
        record.last_updated_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        record.application_status = None;
        assert!(record.has_inverted_dates());
        record.application_status = Some(ApplicationStatus::Completed);
        assert!(record.has_inverted_dates());
    }

    #[test]
    fn foreign_branch_is_a_mismatch() {
        let mut record = sample_application();
        record.dha_branch_name = "Durban".to_string();
        assert!(record.has_province_mismatch());
    }
}
