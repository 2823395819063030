use std::{error::Error, fmt};

/// Fatal setup-time configuration errors. The engine performs only pure
/// arithmetic after setup, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidPlaneCount(u32),
    InvalidPerPlaneCount(u32),
    InvalidAltitude(f64),
    InvalidInclination(f64),
    PopulationMismatch { expected: u32, actual: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPlaneCount(n) => {
                write!(f, "plane count must be at least 1, got {}", n)
            }
            ConfigError::InvalidPerPlaneCount(n) => {
                write!(f, "satellites per plane must be at least 1, got {}", n)
            }
            ConfigError::InvalidAltitude(a) => {
                write!(f, "orbital altitude must be positive, got {} km", a)
            }
            ConfigError::InvalidInclination(i) => {
                write!(f, "inclination must be in (0, 90] degrees, got {}", i)
            }
            ConfigError::PopulationMismatch { expected, actual } => write!(
                f,
                "constellation layout expects {} satellites (planes x per-plane) but {} were instantiated",
                expected, actual
            ),
        }
    }
}

impl Error for ConfigError {}
