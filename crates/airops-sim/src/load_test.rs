//! Load-test scenario generator.
//!
//! Produces a `ScenarioFile` with `sides` factions, each owning
//! `units_per_side` aircraft and one airbase per aircraft. Positions and
//! performance figures are random but fully determined by the seed.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use airops_core::params::*;
use airops_core::Coordinates;

use crate::config::{ScenarioConfig, ScenarioFile};

/// Scenario length written into generated files (four hours).
const LOAD_TEST_DURATION_SECS: f64 = 14_400.0;
const SIDE_COLORS: [&str; 6] = ["red", "blue", "green", "yellow", "white", "black"];
const ROUTE_WAYPOINTS: usize = 3;
/// Max waypoint offset from the start position, degrees.
const ROUTE_MAX_OFFSET_DEG: f64 = 1.0;
/// Airbase offset from its aircraft's start position, degrees.
const AIRBASE_OFFSET_DEG: f64 = 0.3;
const MAX_FUEL_LBS: f64 = 5_000.0;

#[derive(Debug, Clone, Copy)]
pub struct LoadTestConfig {
    pub sides: usize,
    pub units_per_side: usize,
    pub seed: u64,
    /// Written as both start and current time.
    pub start_time: f64,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            sides: 2,
            units_per_side: 10,
            seed: 42,
            start_time: 0.0,
        }
    }
}

pub fn generate(config: &LoadTestConfig) -> ScenarioFile {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut file = ScenarioFile {
        scenario: ScenarioParameters {
            id: format!("load-test-{}", config.seed),
            name: "Load Test Scenario".to_string(),
            start_time: config.start_time,
            current_time: config.start_time,
            duration_seconds: LOAD_TEST_DURATION_SECS,
            time_compression: 1.0,
        },
        config: ScenarioConfig::default(),
        ..Default::default()
    };

    for i in 1..=config.sides {
        let side_id = format!("side-{i}");
        file.sides.push(SideParameters {
            id: side_id.clone(),
            name: i.to_string(),
            color: SIDE_COLORS[i % SIDE_COLORS.len()].to_string(),
            total_score: 0.0,
        });

        for j in 0..config.units_per_side {
            let idx = format!("{i}-{j}");
            let lat: f64 = rng.gen_range(-90.0..=90.0);
            let lon: f64 = rng.gen_range(-180.0..=180.0);
            let altitude = f64::from(rng.gen_range(1_000_i32..=30_000));
            let airbase_id = format!("airbase-{idx}");

            file.airbases.push(AirbaseParameters {
                unit: UnitParameters {
                    id: airbase_id.clone(),
                    name: format!("Airbase {idx}"),
                    class_name: "Test Airbase".to_string(),
                    side_id: side_id.clone(),
                    coordinates: Coordinates::normalized(
                        lat + AIRBASE_OFFSET_DEG,
                        lon + AIRBASE_OFFSET_DEG,
                        0.0,
                    ),
                    selected: false,
                },
                based_aircraft: Default::default(),
            });

            let route = (0..ROUTE_WAYPOINTS)
                .map(|_| {
                    Coordinates::normalized(
                        lat + rng.gen_range(-ROUTE_MAX_OFFSET_DEG..=ROUTE_MAX_OFFSET_DEG),
                        lon + rng.gen_range(-ROUTE_MAX_OFFSET_DEG..=ROUTE_MAX_OFFSET_DEG),
                        altitude,
                    )
                })
                .collect();

            file.aircraft.push(AircraftParameters {
                movable: MovableUnitParameters {
                    unit: UnitParameters {
                        id: format!("aircraft-{idx}"),
                        name: format!("Aircraft {idx}"),
                        class_name: "Test Aircraft".to_string(),
                        side_id: side_id.clone(),
                        coordinates: Coordinates::normalized(lat, lon, altitude),
                        selected: false,
                    },
                    heading: rng.gen_range(0.0..360.0),
                    speed_knots: rng.gen_range(200.0..=600.0),
                    current_fuel_lbs: rng.gen_range(1_000.0..=MAX_FUEL_LBS),
                    max_fuel_lbs: MAX_FUEL_LBS,
                    fuel_rate_lbs_per_hour: rng.gen_range(100.0..=500.0),
                    route,
                },
                home_base_id: airbase_id,
                return_to_base: false,
                target_id: String::new(),
            });
        }
    }

    file
}
