use thiserror::Error;

/// Invalid generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("application records require a non-empty population registry")]
    EmptyRegistry,
}
