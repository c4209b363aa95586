//! Generator configuration.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Injection rates for the three configurable defect families, as
/// fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IssueRates {
    /// Fraction of registry rows whose identifier is overwritten with
    /// another row's identifier.
    pub duplicate: f64,
    /// Fraction of registry rows with one nulled contact/location field.
    pub missing: f64,
    /// Fraction of rows with an invalid value (postal code, future created
    /// date); formatting quirks run at twice this rate.
    pub invalid: f64,
}

impl Default for IssueRates {
    fn default() -> Self {
        Self {
            duplicate: 0.02,
            missing: 0.03,
            invalid: 0.01,
        }
    }
}

impl IssueRates {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("duplicate rate", self.duplicate),
            ("missing rate", self.missing),
            ("invalid rate", self.invalid),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Full configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Population registry row count.
    pub population_rows: usize,
    /// Applications row count.
    pub application_rows: usize,
    pub rates: IssueRates,
    /// Seed for the run's single random source. Same seed + same
    /// configuration + same `today` reproduces the tables byte for byte.
    pub seed: u64,
    /// The generation moment. Created-date ranges, future-date offsets and
    /// application-date windows are all anchored here.
    pub today: NaiveDate,
    /// Emit a progress bar while generating (useful above ~10^6 rows).
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            population_rows: 10_000,
            application_rows: 5_000,
            rates: IssueRates::default(),
            seed: 42,
            today: Utc::now().date_naive(),
            show_progress: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rates.validate()?;
        if self.application_rows > 0 && self.population_rows == 0 {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.rates.missing = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange { name: "missing rate", .. })
        ));
    }

    #[test]
    fn applications_without_registry_are_rejected() {
        let config = GeneratorConfig {
            population_rows: 0,
            application_rows: 10,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyRegistry)));
    }
}
