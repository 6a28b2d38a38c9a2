//! Theme error types

use thiserror::Error;

/// Errors raised while loading or validating a field theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document could not be parsed (also covers bad color strings)
    #[error("failed to parse field theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// A metric is negative, zero where it must be positive, or not finite
    #[error("invalid metric `{name}`: {value}")]
    InvalidMetric { name: &'static str, value: f32 },

    /// Display density must be a positive, finite scale factor
    #[error("invalid display density: {0}")]
    InvalidDensity(f32),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
