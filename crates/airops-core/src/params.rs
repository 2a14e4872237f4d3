//! Parameter records supplied by the host to construct entities.
//!
//! Field names and units are a stable contract with the host: records
//! serialize with camelCase names, speeds in knots, fuel in pounds and
//! pounds per hour, and times in seconds. Each record nests its parent
//! record with `#[serde(flatten)]`, so the wire form stays flat.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SIDE_COLOR, DEFAULT_TIME_COMPRESSION};
use crate::types::Coordinates;

/// Identity and placement shared by every unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitParameters {
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub side_id: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub selected: bool,
}

/// A unit that moves along a route and burns fuel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovableUnitParameters {
    #[serde(flatten)]
    pub unit: UnitParameters,
    /// Degrees, [0, 360).
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub speed_knots: f64,
    #[serde(default)]
    pub current_fuel_lbs: f64,
    #[serde(default)]
    pub max_fuel_lbs: f64,
    #[serde(default)]
    pub fuel_rate_lbs_per_hour: f64,
    /// Initial route, front first.
    #[serde(default)]
    pub route: Vec<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftParameters {
    #[serde(flatten)]
    pub movable: MovableUnitParameters,
    /// Soft reference to an airbase id. Empty means "nearest same-side base".
    #[serde(default)]
    pub home_base_id: String,
    #[serde(default)]
    pub return_to_base: bool,
    /// Soft reference to any unit id. Empty means no target.
    #[serde(default)]
    pub target_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirbaseParameters {
    #[serde(flatten)]
    pub unit: UnitParameters,
    /// Based-aircraft counts keyed by aircraft class name.
    #[serde(default)]
    pub based_aircraft: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideParameters {
    pub id: String,
    pub name: String,
    #[serde(default = "default_side_color")]
    pub color: String,
    #[serde(default)]
    pub total_score: f64,
}

impl Default for SideParameters {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            color: default_side_color(),
            total_score: 0.0,
        }
    }
}

fn default_side_color() -> String {
    DEFAULT_SIDE_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameters {
    pub id: String,
    pub name: String,
    /// Seconds (typically a Unix timestamp).
    #[serde(default)]
    pub start_time: f64,
    /// Seconds, same epoch as `start_time`.
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration_seconds: f64,
    /// Multiplier from host seconds to simulated seconds.
    #[serde(default = "default_time_compression")]
    pub time_compression: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            start_time: 0.0,
            current_time: 0.0,
            duration_seconds: 0.0,
            time_compression: DEFAULT_TIME_COMPRESSION,
        }
    }
}

fn default_time_compression() -> f64 {
    DEFAULT_TIME_COMPRESSION
}
