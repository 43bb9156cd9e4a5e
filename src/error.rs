use std::fmt;

/// Initialization errors. Once a simulation starts, per-tick work is pure
/// numeric computation and cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Surface dimensions must both be positive.
    InvalidSurface { width: f64, height: f64 },
    /// Grid spacing must be positive.
    InvalidSpacing(f64),
    /// A settings value outside its valid range.
    InvalidSettings(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSurface { width, height } => {
                write!(f, "invalid surface dimensions {width}x{height}")
            }
            ConfigError::InvalidSpacing(step) => {
                write!(f, "invalid grid spacing {step}")
            }
            ConfigError::InvalidSettings(msg) => {
                write!(f, "invalid settings: {msg}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
