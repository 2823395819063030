use serde::{Deserialize, Serialize};

/// Sense of travel along the orbit. Adjacent planes counter-rotate so that
/// their satellites cross in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Prograde,
    Retrograde,
}

impl Direction {
    /// Even-numbered planes run prograde, odd-numbered planes retrograde.
    pub fn for_plane(plane: u32) -> Self {
        if plane % 2 == 0 {
            Direction::Prograde
        } else {
            Direction::Retrograde
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Prograde => 1.0,
            Direction::Retrograde => -1.0,
        }
    }
}

/// Static per-satellite descriptor, assigned once when the satellite entity
/// is instantiated and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrbitalSlot {
    /// Orbital plane index in [0, plane_count).
    pub plane: u32,
    /// Slot index within the plane, in [0, per_plane_count).
    pub index_in_plane: u32,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_alternates_by_plane_parity() {
        assert_eq!(Direction::for_plane(0), Direction::Prograde);
        assert_eq!(Direction::for_plane(1), Direction::Retrograde);
        assert_eq!(Direction::for_plane(2), Direction::Prograde);
        assert_eq!(Direction::for_plane(7), Direction::Retrograde);
    }

    #[test]
    fn direction_signs_are_opposite() {
        assert_eq!(Direction::Prograde.sign(), 1.0);
        assert_eq!(Direction::Retrograde.sign(), -1.0);
    }
}
