//! Geometry engine for a LEO Walker-style satellite constellation.
//!
//! Models the static angular layout of evenly spaced orbital planes, the
//! time-driven position of each satellite under a circular-orbit
//! approximation, the deterministic placement of ground stations along a
//! plane's ground track, and the chord distance between a ground station and
//! a satellite with special handling at the longitude grid edges.
//!
//! The discrete-event scheduler that advances simulation time lives outside
//! this crate; the engine is a set of pure position queries over the
//! [`mobility::MobilityModel`] capability.

pub mod config;
pub mod constants;
pub mod mobility;
pub mod models;

pub use config::{ConfigError, ConstellationConfig};
pub use mobility::{
    distance_ground_to_sat, ConstellationLayout, GroundStationMobility, MobilityModel,
    SatelliteMobility, StationOrdinal,
};
pub use models::{Direction, GeoPosition, OrbitalSlot};
