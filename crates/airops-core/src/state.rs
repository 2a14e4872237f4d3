//! Scenario snapshot: the complete visible state handed to the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;
use crate::types::Coordinates;

/// Read model of a scenario after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    pub scenario: ScenarioView,
    pub sides: Vec<SideView>,
    pub airbases: Vec<AirbaseView>,
    pub aircraft: Vec<AircraftView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub id: String,
    pub name: String,
    pub start_time: f64,
    pub current_time: f64,
    pub duration_seconds: f64,
    pub time_compression: f64,
    /// `current_time - start_time`.
    pub elapsed_seconds: f64,
    pub complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub total_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirbaseView {
    pub kind: UnitKind,
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub side_id: String,
    pub coordinates: Coordinates,
    pub selected: bool,
    pub based_aircraft: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftView {
    pub kind: UnitKind,
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub side_id: String,
    pub coordinates: Coordinates,
    pub selected: bool,
    /// Degrees, [0, 360).
    pub heading: f64,
    pub speed_knots: f64,
    pub current_fuel_lbs: f64,
    pub max_fuel_lbs: f64,
    pub fuel_rate_lbs_per_hour: f64,
    pub home_base_id: String,
    pub return_to_base: bool,
    pub target_id: String,
    /// Remaining waypoints, next first.
    pub route: Vec<Coordinates>,
}
