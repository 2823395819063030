use serde::{Deserialize, Serialize};

/// Geodetic position exchanged between every component of the engine.
///
/// Latitude is in [-90, 90] degrees (negative = southern hemisphere),
/// longitude in [-180, 180) degrees (negative = western hemisphere).
/// Positions are value types: queries return a fresh `GeoPosition`, nothing
/// is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

impl GeoPosition {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_km: f64) -> Self {
        GeoPosition {
            latitude_deg,
            longitude_deg,
            altitude_km,
        }
    }
}

/// Wraps an angle into [0, 360) degrees.
pub fn wrap_degrees_360(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Wraps a longitude into [-180, 180) degrees. +180 maps to -180, which is
/// the populated edge of the longitude grid.
pub fn wrap_longitude_deg(longitude_deg: f64) -> f64 {
    (longitude_deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(0.0, 0.0; "zero")]
    #[test_case(360.0, 0.0; "full turn")]
    #[test_case(-45.0, 315.0; "negative angle")]
    #[test_case(725.0, 5.0; "beyond two turns")]
    fn test_wrap_degrees_360(angle: f64, expected: f64) {
        assert_abs_diff_eq!(wrap_degrees_360(angle), expected, epsilon = 1e-12);
    }

    #[test_case(180.0, -180.0; "antimeridian east")]
    #[test_case(-180.0, -180.0; "antimeridian west")]
    #[test_case(190.0, -170.0; "past the seam")]
    #[test_case(-108.0, -108.0; "in range")]
    #[test_case(540.0, -180.0; "aliased antimeridian")]
    fn test_wrap_longitude(lon: f64, expected: f64) {
        assert_abs_diff_eq!(wrap_longitude_deg(lon), expected, epsilon = 1e-12);
    }
}
