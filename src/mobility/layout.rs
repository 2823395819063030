use tracing::debug;

use crate::config::{ConfigError, ConstellationConfig};
use crate::models::geo::wrap_longitude_deg;
use crate::models::{Direction, OrbitalSlot};

/// Static angular geometry shared by every satellite and ground station.
///
/// Computed once at setup from the constellation parameters and read-only
/// afterwards. Planes are spaced evenly around 360 degrees of node longitude
/// and slots evenly around the 360 degree orbital arc; adjacent planes
/// counter-rotate.
#[derive(Debug, Clone)]
pub struct ConstellationLayout {
    config: ConstellationConfig,
}

impl ConstellationLayout {
    pub fn new(config: ConstellationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            planes = config.plane_count,
            per_plane = config.per_plane_count,
            altitude_km = config.altitude_km,
            inclination_deg = config.inclination_deg,
            "derived constellation layout"
        );
        Ok(ConstellationLayout { config })
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    /// Node longitude spacing between adjacent planes [deg].
    pub fn plane_spacing_deg(&self) -> f64 {
        360.0 / self.config.plane_count as f64
    }

    /// Phase spacing between adjacent slots of one plane [deg].
    pub fn phase_spacing_deg(&self) -> f64 {
        360.0 / self.config.per_plane_count as f64
    }

    /// Ascending-node longitude of plane `plane`, in [-180, 180).
    /// Plane 0 sits on the antimeridian, the populated longitude edge.
    pub fn plane_longitude_deg(&self, plane: u32) -> f64 {
        wrap_longitude_deg(-180.0 + self.plane_spacing_deg() * plane as f64)
    }

    /// Initial orbital phase of slot `index_in_plane` within its plane [deg].
    pub fn phase_offset_deg(&self, index_in_plane: u32) -> f64 {
        self.phase_spacing_deg() * index_in_plane as f64
    }

    pub fn slot(&self, plane: u32, index_in_plane: u32) -> OrbitalSlot {
        OrbitalSlot {
            plane,
            index_in_plane,
            direction: Direction::for_plane(plane),
        }
    }

    /// All P x N slots, plane-major.
    pub fn slots(&self) -> impl Iterator<Item = OrbitalSlot> + '_ {
        (0..self.config.plane_count).flat_map(move |p| {
            (0..self.config.per_plane_count).map(move |s| self.slot(p, s))
        })
    }

    pub fn total_satellites(&self) -> u32 {
        self.config.total_satellites()
    }

    /// Checks that the externally instantiated satellite population matches
    /// the layout. The engine cannot detect a mismatch on its own once
    /// queries start, so callers must run this at setup and abort on error.
    pub fn validate_population(&self, actual: u32) -> Result<(), ConfigError> {
        let expected = self.total_satellites();
        if actual != expected {
            return Err(ConfigError::PopulationMismatch { expected, actual });
        }
        Ok(())
    }
}
