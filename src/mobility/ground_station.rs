use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mobility::{ConstellationLayout, MobilityModel};
use crate::models::GeoPosition;

/// Which of the two supported ground stations is being placed. Passed
/// explicitly by the caller so placement is a pure function of
/// (configuration, ordinal) rather than of call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationOrdinal {
    First,
    Second,
}

/// Fixed ground infrastructure placed along a satellite plane's ground track.
///
/// The position is computed once from the constellation parameters and cached;
/// `recompute()` re-derives the same value. Stations never move and report
/// zero speed.
#[derive(Debug, Clone)]
pub struct GroundStationMobility {
    ordinal: StationOrdinal,
    plane_count: u32,
    per_plane_count: u32,
    inclination_deg: f64,
    position: GeoPosition,
}

impl GroundStationMobility {
    pub fn new(layout: &ConstellationLayout, ordinal: StationOrdinal) -> Self {
        let config = layout.config();
        let position = Self::place(
            ordinal,
            config.plane_count,
            config.per_plane_count,
            config.inclination_deg,
        );
        debug!(
            ?ordinal,
            latitude = position.latitude_deg,
            longitude = position.longitude_deg,
            "placed ground station"
        );
        GroundStationMobility {
            ordinal,
            plane_count: config.plane_count,
            per_plane_count: config.per_plane_count,
            inclination_deg: config.inclination_deg,
            position,
        }
    }

    pub fn ordinal(&self) -> StationOrdinal {
        self.ordinal
    }

    pub fn position(&self) -> GeoPosition {
        self.position
    }

    /// The first station sits at the pole-ward edge of the latitude band of
    /// plane 0, on the antimeridian. The second is pushed further from the
    /// pole by one inter-satellite latitude spacing times half the plane
    /// count, and shifted east by 3/7 of the plane span so it falls near a
    /// geographically separated plane crossing.
    fn place(
        ordinal: StationOrdinal,
        plane_count: u32,
        per_plane_count: u32,
        inclination_deg: f64,
    ) -> GeoPosition {
        let phase_spacing_deg = 360.0 / per_plane_count as f64;
        let first_latitude_deg = inclination_deg - phase_spacing_deg / 2.0;
        match ordinal {
            StationOrdinal::First => GeoPosition::new(first_latitude_deg, -180.0, 0.0),
            StationOrdinal::Second => {
                let latitude_deg =
                    first_latitude_deg - phase_spacing_deg * plane_count as f64 / 2.0;
                let half_plane_spacing_deg = 360.0 / (plane_count as f64 * 2.0);
                let longitude_deg =
                    -180.0 + half_plane_spacing_deg * ((3 * plane_count) / 7) as f64;
                GeoPosition::new(latitude_deg, longitude_deg, 0.0)
            }
        }
    }
}

impl MobilityModel for GroundStationMobility {
    fn position_at(&self, _now: Epoch) -> GeoPosition {
        self.position
    }

    fn speed_km_s(&self) -> f64 {
        0.0
    }

    fn recompute(&mut self) {
        self.position = Self::place(
            self.ordinal,
            self.plane_count,
            self.per_plane_count,
            self.inclination_deg,
        );
    }
}
