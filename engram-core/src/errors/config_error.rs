/// Configuration validation and parse errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ranking weight '{name}' must be non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("SLO max_age_hours must be positive, got {value}")]
    InvalidSlo { value: f64 },

    #[error("threshold '{name}' out of range, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
