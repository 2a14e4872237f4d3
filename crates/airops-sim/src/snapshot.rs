//! Snapshot builder: reads the scenario and produces a `ScenarioSnapshot`.
//!
//! Read-only; never modifies the scenario.

use airops_core::state::*;

use crate::scenario::Scenario;
use crate::side::Side;
use crate::units::{Aircraft, Airbase, SimUnit};

pub fn build_snapshot(scenario: &Scenario) -> ScenarioSnapshot {
    ScenarioSnapshot {
        scenario: ScenarioView {
            id: scenario.id().to_string(),
            name: scenario.name().to_string(),
            start_time: scenario.start_time(),
            current_time: scenario.current_time(),
            duration_seconds: scenario.duration_seconds(),
            time_compression: scenario.time_compression(),
            elapsed_seconds: scenario.elapsed_seconds(),
            complete: scenario.is_complete(),
        },
        sides: scenario.sides().iter().map(side_view).collect(),
        airbases: scenario.all_airbases().map(|a| airbase_view(&a)).collect(),
        aircraft: scenario.all_aircraft().map(|a| aircraft_view(&a)).collect(),
    }
}

fn side_view(side: &Side) -> SideView {
    SideView {
        id: side.id().to_string(),
        name: side.name().to_string(),
        color: side.color().to_string(),
        total_score: side.total_score(),
    }
}

fn airbase_view(airbase: &Airbase) -> AirbaseView {
    let core = airbase.core();
    AirbaseView {
        kind: airbase.kind(),
        id: core.id.clone(),
        name: core.name.clone(),
        class_name: core.class_name.clone(),
        side_id: core.side_id.clone(),
        coordinates: core.coordinates,
        selected: core.selected,
        based_aircraft: airbase.based_aircraft().clone(),
    }
}

fn aircraft_view(aircraft: &Aircraft) -> AircraftView {
    let core = aircraft.core();
    let movable = aircraft.movable();
    AircraftView {
        kind: aircraft.kind(),
        id: core.id.clone(),
        name: core.name.clone(),
        class_name: core.class_name.clone(),
        side_id: core.side_id.clone(),
        coordinates: core.coordinates,
        selected: core.selected,
        heading: movable.heading(),
        speed_knots: movable.speed_knots(),
        current_fuel_lbs: movable.current_fuel_lbs(),
        max_fuel_lbs: movable.max_fuel_lbs(),
        fuel_rate_lbs_per_hour: movable.fuel_rate_lbs_per_hour(),
        home_base_id: aircraft.home_base_id().to_string(),
        return_to_base: aircraft.return_to_base(),
        target_id: aircraft.target_id().to_string(),
        route: movable.route().iter().copied().collect(),
    }
}
