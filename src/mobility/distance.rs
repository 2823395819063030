use nalgebra as na;

use crate::constants::EARTH_RADIUS_KM;
use crate::models::GeoPosition;

/// Longitude difference in degrees with special handling at the -180 and 0
/// meridians, the two longitude values the layout actually populates. When
/// one side sits exactly on a special meridian, the shorter of the direct
/// difference and the difference through the seam-adjacent meridian is used
/// (-180 and 0 are antipodal markers of the same orbital plane). The rule
/// intentionally matches only exact -180/0 values and is not a general
/// antimeridian treatment.
fn seam_delta_longitude_deg(ground_lon: f64, sat_lon: f64) -> f64 {
    let a = ground_lon;
    let b = sat_lon;
    if (b == -180.0 && a == -180.0) || (b == 0.0 && a == 0.0) {
        (a - b).abs()
    } else if b == -180.0 {
        f64::min((b - a).abs(), (0.0 - a).abs())
    } else if a == -180.0 {
        f64::min((b - a).abs(), (b - 0.0).abs())
    } else if b == 0.0 {
        f64::min((b - a).abs(), (180.0 - a).abs())
    } else if a == 0.0 {
        f64::min((b - a).abs(), (b - 180.0).abs())
    } else {
        (a - b).abs()
    }
}

/// Chord (straight-line) distance in kilometers between a ground station and
/// a satellite. The ground point is taken at Earth radius, the satellite at
/// Earth radius plus its altitude, so the argument order (ground, satellite)
/// matters. Inputs outside the documented latitude/longitude ranges are not
/// rejected; they produce mathematically defined but physically meaningless
/// results.
pub fn distance_ground_to_sat(ground: &GeoPosition, sat: &GeoPosition) -> f64 {
    let r = EARTH_RADIUS_KM;
    let delta_lat = (sat.latitude_deg - ground.latitude_deg).to_radians();
    let delta_lon = seam_delta_longitude_deg(ground.longitude_deg, sat.longitude_deg).to_radians();

    let chord = na::Vector3::new(
        r + sat.altitude_km - r * delta_lon.cos() * delta_lat.cos(),
        r * delta_lon.sin() * delta_lat.cos(),
        r * delta_lat.sin(),
    );
    chord.norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(-180.0, -180.0, 0.0; "both on the antimeridian")]
    #[test_case(0.0, 0.0, 0.0; "both on the prime meridian")]
    #[test_case(0.0, 180.0, 0.0; "ground at zero, satellite at 180")]
    #[test_case(-180.0, 0.0, 0.0; "ground at antimeridian, satellite at zero")]
    #[test_case(-180.0, 90.0, 90.0; "ground at antimeridian, satellite mid hemisphere")]
    #[test_case(0.0, 90.0, 90.0; "ground at zero, satellite mid hemisphere")]
    #[test_case(50.0, 110.0, 60.0; "no special meridian involved")]
    #[test_case(-170.0, 170.0, 340.0; "near-seam values take the direct difference")]
    fn seam_rule(ground_lon: f64, sat_lon: f64, expected: f64) {
        assert_abs_diff_eq!(
            seam_delta_longitude_deg(ground_lon, sat_lon),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn colocated_on_the_seam_reduces_to_altitude() {
        let ground = GeoPosition::new(80.0, -180.0, 0.0);
        let sat = GeoPosition::new(80.0, -180.0, 2000.0);
        assert_abs_diff_eq!(distance_ground_to_sat(&ground, &sat), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn zenith_pass_off_the_seam_reduces_to_altitude() {
        let ground = GeoPosition::new(10.0, 50.0, 0.0);
        let sat = GeoPosition::new(10.0, 50.0, 750.0);
        assert_abs_diff_eq!(distance_ground_to_sat(&ground, &sat), 750.0, epsilon = 1e-9);
    }

    #[test]
    fn seam_handling_is_symmetric_across_the_grid_edges() {
        let d1 = distance_ground_to_sat(
            &GeoPosition::new(0.0, 0.0, 0.0),
            &GeoPosition::new(0.0, 180.0, 2000.0),
        );
        let d2 = distance_ground_to_sat(
            &GeoPosition::new(0.0, -180.0, 0.0),
            &GeoPosition::new(0.0, 0.0, 2000.0),
        );
        assert_abs_diff_eq!(d1, d2, epsilon = 1e-9);
        assert_abs_diff_eq!(d1, 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_in_longitude() {
        let ground = GeoPosition::new(0.0, 0.0, 0.0);
        let sat = GeoPosition::new(0.0, 90.0, 2000.0);
        // sqrt((R + 2000)^2 + R^2) for a 90 degree longitude separation
        assert_abs_diff_eq!(distance_ground_to_sat(&ground, &sat), 10529.6, epsilon = 0.5);
    }

    #[test]
    fn general_oblique_geometry() {
        let ground = GeoPosition::new(45.0, 100.0, 0.0);
        let sat = GeoPosition::new(50.0, 110.0, 2000.0);
        assert_abs_diff_eq!(distance_ground_to_sat(&ground, &sat), 2454.4, epsilon = 0.5);
    }

    #[test]
    fn distance_is_never_negative_and_at_least_the_altitude_gap() {
        let ground = GeoPosition::new(75.0, -180.0, 0.0);
        for lon in [-180.0, -108.0, -36.0, 36.0, 108.0] {
            for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
                let sat = GeoPosition::new(lat, lon, 2000.0);
                let d = distance_ground_to_sat(&ground, &sat);
                assert!(d >= 2000.0 - 1e-9, "distance {} below altitude", d);
            }
        }
    }
}
