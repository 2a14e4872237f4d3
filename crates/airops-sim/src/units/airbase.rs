//! Airbases: fixed installations with a based-aircraft inventory.

use std::collections::BTreeMap;

use airops_core::enums::UnitKind;
use airops_core::params::AirbaseParameters;

use super::{BaseFix, SimUnit, TickContext, UnitCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Airbase {
    core: UnitCore,
    /// Counts per aircraft class. Unclamped; may go negative.
    based_aircraft: BTreeMap<String, i32>,
}

impl Airbase {
    pub fn new(params: AirbaseParameters) -> Self {
        Self {
            core: params.unit.into(),
            based_aircraft: params.based_aircraft,
        }
    }

    pub fn based_aircraft(&self) -> &BTreeMap<String, i32> {
        &self.based_aircraft
    }

    /// Count for `class_name`; zero when the class has never been seen.
    pub fn based_aircraft_count(&self, class_name: &str) -> i32 {
        self.based_aircraft.get(class_name).copied().unwrap_or(0)
    }

    pub fn add_based_aircraft(&mut self, class_name: &str, count: i32) {
        *self.based_aircraft.entry(class_name.to_string()).or_insert(0) += count;
    }

    pub fn remove_based_aircraft(&mut self, class_name: &str, count: i32) {
        *self.based_aircraft.entry(class_name.to_string()).or_insert(0) -= count;
    }

    pub(crate) fn fix(&self) -> BaseFix {
        BaseFix {
            id: self.core.id.clone(),
            side_id: self.core.side_id.clone(),
            coordinates: self.core.coordinates,
        }
    }
}

impl SimUnit for Airbase {
    fn core(&self) -> &UnitCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut UnitCore {
        &mut self.core
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Airbase
    }

    /// Airbases never move.
    fn advance(&mut self, _dt: f64, _ctx: &mut TickContext<'_>) {}
}
