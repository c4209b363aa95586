//! Export stage: CSV tables and summary-statistics JSON.
//!
//! The generators hand over finished in-memory tables; everything here is
//! presentation. Absent values render as empty cells, dates as
//! `YYYY-MM-DD`.

mod error;
mod export;

pub use error::ReportError;
pub use export::{
    APPLICATIONS_FILE, REGISTRY_FILE, application_filename, registry_filename,
    write_applications_csv, write_registry_csv, write_summary_json,
};
