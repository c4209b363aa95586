pub mod branches;
pub mod config;
pub mod enums;
pub mod error;
pub mod record;
pub mod stats;

pub use branches::branch_directory;
pub use config::{GeneratorConfig, IssueRates};
pub use enums::{ApplicationStatus, ApplicationType, Gender, Province, SubmissionChannel};
pub use error::ConfigError;
pub use record::{APPLICATION_COLUMNS, ApplicationRecord, PersonRecord, REGISTRY_COLUMNS};
pub use stats::{ApplicationIssues, IssueSummary, RegistryIssues};
