pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const EARTH_RADIUS_KM: f64 = 6378.1; // Radius of Earth used by the geometry model [km]

// Math
pub const PI: f64 = std::f64::consts::PI;
