//! Events raised by units during a tick.

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// A single occurrence during `Scenario::update`, tagged with the
/// simulated time at the end of the tick and the unit that raised it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvent {
    pub time: f64,
    pub side_id: String,
    pub unit_id: String,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum EventKind {
    /// The unit snapped to its front waypoint and popped it.
    WaypointReached {
        waypoint: Coordinates,
        remaining: usize,
    },
    /// Fuel dropped to zero or below. The unit is a removal candidate.
    OutOfFuel { fuel_lbs: f64 },
    /// A returning aircraft is within landing distance of its base.
    /// Raised every tick until a hook lands it or RTB is cleared.
    ReturnedToBase { base_id: String },
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::WaypointReached { .. } => "waypoint-reached",
            EventKind::OutOfFuel { .. } => "out-of-fuel",
            EventKind::ReturnedToBase { .. } => "returned-to-base",
        }
    }
}
