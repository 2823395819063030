use hifitime::Epoch;

use crate::models::GeoPosition;

pub mod distance;
pub mod ground_station;
pub mod layout;
pub mod satellite;

pub use distance::distance_ground_to_sat;
pub use ground_station::{GroundStationMobility, StationOrdinal};
pub use layout::ConstellationLayout;
pub use satellite::SatelliteMobility;

/// Position-provider capability shared by satellites and ground stations.
///
/// The external scheduler drives everything through this surface: it hands in
/// the current simulation time and reads back a position. `recompute` rebuilds
/// the model's derived values from configuration; it takes no position
/// argument because positions are always derived, never assigned.
pub trait MobilityModel {
    /// Position at the given simulation time. Pure: repeated queries with the
    /// same time yield the same position.
    fn position_at(&self, now: Epoch) -> GeoPosition;

    /// Ground speed of the model [km/s]; zero for fixed infrastructure.
    fn speed_km_s(&self) -> f64;

    /// Re-derives cached values from configuration. Idempotent.
    fn recompute(&mut self);
}
