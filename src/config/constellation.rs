use hifitime::Epoch;

use crate::config::errors::ConfigError;

/// Immutable constellation parameters supplied by the caller at setup.
///
/// `plane_count` x `per_plane_count` must match the number of satellite
/// entities the caller instantiates; the engine checks this through
/// [`crate::mobility::ConstellationLayout::validate_population`] and treats a
/// mismatch as a fatal configuration error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationConfig {
    /// Number of orbital rings.
    pub plane_count: u32,
    /// Satellites per ring.
    pub per_plane_count: u32,
    /// Orbital altitude [km]. Controls angular velocity via the circular
    /// orbit approximation.
    pub altitude_km: f64,
    /// Orbital inclination [deg]. Near-polar (90) by default; kept a
    /// parameter rather than hard-coded.
    pub inclination_deg: f64,
    /// Simulation-time reference at which all phase angles are zeroed.
    pub epoch: Epoch,
}

impl ConstellationConfig {
    pub fn new(plane_count: u32, per_plane_count: u32, altitude_km: f64) -> Self {
        ConstellationConfig {
            plane_count,
            per_plane_count,
            altitude_km,
            inclination_deg: 90.0,
            epoch: Epoch::from_gregorian_utc(2020, 1, 1, 0, 0, 0, 0),
        }
    }

    pub fn with_inclination_deg(mut self, inclination_deg: f64) -> Self {
        self.inclination_deg = inclination_deg;
        self
    }

    pub fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Total satellite population implied by the layout.
    pub fn total_satellites(&self) -> u32 {
        self.plane_count * self.per_plane_count
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plane_count < 1 {
            return Err(ConfigError::InvalidPlaneCount(self.plane_count));
        }
        if self.per_plane_count < 1 {
            return Err(ConfigError::InvalidPerPlaneCount(self.per_plane_count));
        }
        if !(self.altitude_km > 0.0) {
            return Err(ConfigError::InvalidAltitude(self.altitude_km));
        }
        if !(self.inclination_deg > 0.0 && self.inclination_deg <= 90.0) {
            return Err(ConfigError::InvalidInclination(self.inclination_deg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = ConstellationConfig::new(5, 12, 2000.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_satellites(), 60);
        assert_eq!(config.inclination_deg, 90.0);
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(
            ConstellationConfig::new(0, 12, 2000.0).validate(),
            Err(ConfigError::InvalidPlaneCount(0))
        );
        assert_eq!(
            ConstellationConfig::new(5, 0, 2000.0).validate(),
            Err(ConfigError::InvalidPerPlaneCount(0))
        );
    }

    #[test]
    fn non_positive_altitude_is_rejected() {
        assert_eq!(
            ConstellationConfig::new(5, 12, 0.0).validate(),
            Err(ConfigError::InvalidAltitude(0.0))
        );
        assert_eq!(
            ConstellationConfig::new(5, 12, -550.0).validate(),
            Err(ConfigError::InvalidAltitude(-550.0))
        );
    }

    #[test]
    fn out_of_range_inclination_is_rejected() {
        let config = ConstellationConfig::new(5, 12, 2000.0).with_inclination_deg(120.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidInclination(120.0))
        );
    }
}
