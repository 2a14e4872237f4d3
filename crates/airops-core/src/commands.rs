//! Host commands addressed to the scenario.
//!
//! Commands carry the keys of the unit they act on. They are applied
//! immediately by the scenario; there is no queue.

use serde::{Deserialize, Serialize};

use crate::params::{AircraftParameters, AirbaseParameters, SideParameters};

/// All host-issued mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum HostCommand {
    // --- Collections ---
    AddSide(SideParameters),
    RemoveSide { side_id: String },
    AddAirbase(AirbaseParameters),
    RemoveAirbase { side_id: String, airbase_id: String },
    AddAircraft(AircraftParameters),
    RemoveAircraft { side_id: String, aircraft_id: String },

    // --- Routes ---
    /// Append a waypoint to the back of the aircraft's route.
    AddPointToRoute {
        side_id: String,
        aircraft_id: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        altitude: f64,
    },
    /// Drop the next `count` waypoints. Ignored when `count` is 0 or
    /// exceeds the route length.
    ClearFirstNPointsFromRoute {
        side_id: String,
        aircraft_id: String,
        count: usize,
    },
    /// Drop the last `count` waypoints. Same bounds as above.
    ClearLastNPointsFromRoute {
        side_id: String,
        aircraft_id: String,
        count: usize,
    },
    ClearRoute { side_id: String, aircraft_id: String },

    // --- Aircraft ---
    ToggleReturnToBase { side_id: String, aircraft_id: String },
    /// Remove a returning aircraft and add it to its home base inventory.
    LandAircraft { side_id: String, aircraft_id: String },
    SetSpeed {
        side_id: String,
        aircraft_id: String,
        speed_knots: f64,
    },
    SetTarget {
        side_id: String,
        aircraft_id: String,
        target_id: String,
    },

    // --- Airbases ---
    AddBasedAircraft {
        side_id: String,
        airbase_id: String,
        class_name: String,
        count: i32,
    },
    RemoveBasedAircraft {
        side_id: String,
        airbase_id: String,
        class_name: String,
        count: i32,
    },

    // --- Simulation control ---
    /// Set time compression (1.0 = real time, 0.0 = paused).
    SetTimeCompression { time_compression: f64 },
}
