pub mod constellation;
pub mod errors;

pub use constellation::ConstellationConfig;
pub use errors::ConfigError;
