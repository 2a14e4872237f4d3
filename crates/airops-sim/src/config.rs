//! Scenario configuration and scenario files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use airops_core::params::{
    AircraftParameters, AirbaseParameters, ScenarioParameters, SideParameters,
};

use crate::error::ConfigError;
use crate::scenario::Scenario;

/// What to do when an insert collides with an existing key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Fail the insert with `ScenarioError::Duplicate*`.
    #[default]
    Reject,
    /// Accept the insert; lookups return the earliest match.
    Allow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Keep raised events for `Scenario::drain_events`. Hooks see every
    /// event either way.
    #[serde(default = "default_emit_events")]
    pub emit_events: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            emit_events: true,
        }
    }
}

fn default_emit_events() -> bool {
    true
}

/// A complete scenario as a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    pub scenario: ScenarioParameters,
    #[serde(default)]
    pub config: ScenarioConfig,
    #[serde(default)]
    pub sides: Vec<SideParameters>,
    #[serde(default)]
    pub airbases: Vec<AirbaseParameters>,
    #[serde(default)]
    pub aircraft: Vec<AircraftParameters>,
}

impl ScenarioFile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let file = Self::from_json_str(&text)?;
        info!(path = %path.display(), "loaded scenario file");
        Ok(file)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Construct the scenario: sides first, then airbases, then aircraft,
    /// each in file order.
    pub fn build(self) -> Result<Scenario, ConfigError> {
        let mut scenario = Scenario::with_config(self.scenario, self.config);
        for side in self.sides {
            scenario.add_side(side)?;
        }
        for airbase in self.airbases {
            scenario.add_airbase(airbase)?;
        }
        for aircraft in self.aircraft {
            scenario.add_aircraft(aircraft)?;
        }
        Ok(scenario)
    }
}
