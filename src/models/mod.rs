pub mod geo;
pub mod slot;

pub use geo::GeoPosition;
pub use slot::{Direction, OrbitalSlot};
