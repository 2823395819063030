use csv::Writer;
use hifitime::Duration;
use leo_constellation::{
    distance_ground_to_sat, ConstellationConfig, ConstellationLayout, GroundStationMobility,
    MobilityModel, SatelliteMobility, StationOrdinal,
};
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 5 planes x 12 satellites at 2000 km, near-polar
    let config = ConstellationConfig::new(5, 12, 2000.0);
    let layout = ConstellationLayout::new(config)?;

    let satellites: Vec<SatelliteMobility> = layout
        .slots()
        .map(|slot| SatelliteMobility::new(&layout, slot))
        .collect();
    layout.validate_population(satellites.len() as u32)?;

    let first_station = GroundStationMobility::new(&layout, StationOrdinal::First);
    let second_station = GroundStationMobility::new(&layout, StationOrdinal::Second);
    info!(
        satellites = satellites.len(),
        first_station_lat = first_station.position().latitude_deg,
        second_station_lat = second_station.position().latitude_deg,
        "constellation ready"
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("constellation_track.csv"))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([
        "Time (s)",
        "Plane",
        "Slot",
        "Latitude (deg)",
        "Longitude (deg)",
        "Altitude (km)",
        "Speed (km/s)",
        "Distance to Station 1 (km)",
        "Distance to Station 2 (km)",
    ])?;

    // Sweep one full orbital period; every satellite returns to its t=0
    // position at the end of the sweep.
    let period_s = satellites[0].period_s();
    let steps = 120;
    let dt = period_s / steps as f64;
    let epoch = layout.config().epoch;

    for step in 0..=steps {
        let elapsed = dt * step as f64;
        let now = epoch + Duration::from_seconds(elapsed);
        for sat in &satellites {
            let pos = sat.position_at(now);
            let slot = sat.slot();
            writer.write_record(&[
                elapsed.to_string(),
                slot.plane.to_string(),
                slot.index_in_plane.to_string(),
                pos.latitude_deg.to_string(),
                pos.longitude_deg.to_string(),
                pos.altitude_km.to_string(),
                sat.speed_km_s().to_string(),
                distance_ground_to_sat(&first_station.position(), &pos).to_string(),
                distance_ground_to_sat(&second_station.position(), &pos).to_string(),
            ])?;
        }
    }

    writer.flush()?;
    println!("Constellation track has been written to output/constellation_track.csv");

    Ok(())
}
