use hifitime::Epoch;

use crate::config::ConstellationConfig;
use crate::constants::{EARTH_RADIUS_KM, G, M_EARTH, PI};
use crate::mobility::{ConstellationLayout, MobilityModel};
use crate::models::geo::{wrap_degrees_360, wrap_longitude_deg};
use crate::models::{GeoPosition, OrbitalSlot};

/// Propagates one satellite along its circular orbit.
///
/// The orbital angular velocity follows from altitude alone (Kepler, circular
/// orbit): lower orbits move faster. Position queries are pure functions of
/// the slot and the supplied simulation time, so the scheduler may query at
/// repeated or wall-clock-out-of-order instants freely.
#[derive(Debug, Clone)]
pub struct SatelliteMobility {
    slot: OrbitalSlot,
    altitude_km: f64,
    inclination_deg: f64,
    plane_longitude_deg: f64,
    phase_offset_deg: f64,
    epoch: Epoch,
    // Derived from altitude; refreshed by recompute().
    speed_m_s: f64,
    orbital_period_s: f64,
    angular_rate_deg_s: f64,
}

impl SatelliteMobility {
    pub fn new(layout: &ConstellationLayout, slot: OrbitalSlot) -> Self {
        let config: &ConstellationConfig = layout.config();
        let altitude_km = config.altitude_km;
        SatelliteMobility {
            slot,
            altitude_km,
            inclination_deg: config.inclination_deg,
            plane_longitude_deg: layout.plane_longitude_deg(slot.plane),
            phase_offset_deg: layout.phase_offset_deg(slot.index_in_plane),
            epoch: config.epoch,
            speed_m_s: Self::circular_speed_m_s(altitude_km),
            orbital_period_s: Self::orbital_period_s(altitude_km),
            angular_rate_deg_s: 360.0 / Self::orbital_period_s(altitude_km),
        }
    }

    /// Circular orbital speed at the given altitude [m/s].
    pub fn circular_speed_m_s(altitude_km: f64) -> f64 {
        let radius_m = (EARTH_RADIUS_KM + altitude_km) * 1000.0;
        (G * M_EARTH / radius_m).sqrt()
    }

    /// Orbital period at the given altitude [s].
    pub fn orbital_period_s(altitude_km: f64) -> f64 {
        let radius_km = EARTH_RADIUS_KM + altitude_km;
        2.0 * PI * radius_km / (Self::circular_speed_m_s(altitude_km) / 1000.0)
    }

    pub fn slot(&self) -> OrbitalSlot {
        self.slot
    }

    pub fn period_s(&self) -> f64 {
        self.orbital_period_s
    }

    /// Orbital phase angle at `now`, in [0, 360) degrees along the plane.
    pub fn phase_deg(&self, now: Epoch) -> f64 {
        let elapsed_s = (now - self.epoch).to_seconds();
        wrap_degrees_360(
            self.phase_offset_deg + self.slot.direction.sign() * self.angular_rate_deg_s * elapsed_s,
        )
    }
}

impl MobilityModel for SatelliteMobility {
    /// Projects the orbital phase onto (latitude, longitude) for the plane's
    /// node longitude and the configured inclination. With the default
    /// near-polar inclination the latitude sweeps the full +/-90 band and the
    /// longitude flips to the antipodal value on the descending half of the
    /// orbit. Altitude is constant: circular orbits have no radial motion.
    fn position_at(&self, now: Epoch) -> GeoPosition {
        let u = self.phase_deg(now).to_radians();
        let i = self.inclination_deg.to_radians();
        let latitude_deg = (i.sin() * u.sin()).asin().to_degrees();
        let relative_lon_deg = (u.sin() * i.cos()).atan2(u.cos()).to_degrees();
        GeoPosition::new(
            latitude_deg,
            wrap_longitude_deg(self.plane_longitude_deg + relative_lon_deg),
            self.altitude_km,
        )
    }

    fn speed_km_s(&self) -> f64 {
        self.speed_m_s / 1000.0
    }

    fn recompute(&mut self) {
        self.speed_m_s = Self::circular_speed_m_s(self.altitude_km);
        self.orbital_period_s = Self::orbital_period_s(self.altitude_km);
        self.angular_rate_deg_s = 360.0 / self.orbital_period_s;
    }
}
