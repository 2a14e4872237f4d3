//! The unit hierarchy.
//!
//! Every unit carries a [`UnitCore`] (identity, side, position, selection).
//! [`MovableUnit`] adds kinematics, fuel and a route; [`Aircraft`] wraps a
//! movable unit with return-to-base behaviour; [`Airbase`] adds an
//! inventory and never moves. All of them implement [`SimUnit`], the
//! per-tick contract the scenario drives.

pub mod aircraft;
pub mod airbase;
pub mod movable;

pub use aircraft::Aircraft;
pub use airbase::Airbase;
pub use movable::{Motion, MovableUnit, MovementOutcome};

use airops_core::enums::UnitKind;
use airops_core::events::{EventKind, ScenarioEvent};
use airops_core::params::UnitParameters;
use airops_core::Coordinates;
use airops_geo::distance_km;

/// Identity and placement shared by every unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCore {
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub side_id: String,
    pub coordinates: Coordinates,
    pub selected: bool,
}

impl From<UnitParameters> for UnitCore {
    fn from(params: UnitParameters) -> Self {
        Self {
            id: params.id,
            name: params.name,
            class_name: params.class_name,
            side_id: params.side_id,
            coordinates: params.coordinates,
            selected: params.selected,
        }
    }
}

/// Polymorphic per-tick contract.
pub trait SimUnit {
    fn core(&self) -> &UnitCore;
    fn core_mut(&mut self) -> &mut UnitCore;
    fn kind(&self) -> UnitKind;

    /// Advance the unit by `dt` simulated seconds.
    fn advance(&mut self, dt: f64, ctx: &mut TickContext<'_>);

    fn id(&self) -> &str {
        &self.core().id
    }

    fn name(&self) -> &str {
        &self.core().name
    }

    fn class_name(&self) -> &str {
        &self.core().class_name
    }

    fn side_id(&self) -> &str {
        &self.core().side_id
    }

    fn coordinates(&self) -> Coordinates {
        self.core().coordinates
    }

    fn selected(&self) -> bool {
        self.core().selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.core_mut().selected = selected;
    }

    fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.core_mut().coordinates = coordinates;
    }
}

/// A resolved airbase: its keys and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFix {
    pub id: String,
    pub side_id: String,
    pub coordinates: Coordinates,
}

/// Read access to the scenario's airbases while units are being advanced.
pub trait BaseLocator {
    /// The first airbase with this id, on any side.
    fn find(&self, id: &str) -> Option<BaseFix>;

    /// The airbase of `side_id` closest to `from`.
    fn nearest(&self, side_id: &str, from: &Coordinates) -> Option<BaseFix>;

    /// Home base by id, falling back to the nearest same-side base when the
    /// id is empty or matches nothing.
    fn resolve_home(&self, home_base_id: &str, side_id: &str, from: &Coordinates) -> Option<BaseFix> {
        let by_id = if home_base_id.is_empty() {
            None
        } else {
            self.find(home_base_id)
        };
        by_id.or_else(|| self.nearest(side_id, from))
    }
}

/// Locator over a slice of fixes in scenario order.
pub struct BaseList<'a> {
    bases: &'a [BaseFix],
}

impl<'a> BaseList<'a> {
    pub fn new(bases: &'a [BaseFix]) -> Self {
        Self { bases }
    }
}

impl BaseLocator for BaseList<'_> {
    fn find(&self, id: &str) -> Option<BaseFix> {
        self.bases.iter().find(|fix| fix.id == id).cloned()
    }

    fn nearest(&self, side_id: &str, from: &Coordinates) -> Option<BaseFix> {
        nearest_of(self.bases.iter().filter(|fix| fix.side_id == side_id), from).cloned()
    }
}

/// Closest fix to `from`; the first one wins a tie.
fn nearest_of<'a>(fixes: impl Iterator<Item = &'a BaseFix>, from: &Coordinates) -> Option<&'a BaseFix> {
    let mut best: Option<(f64, &BaseFix)> = None;
    for fix in fixes {
        let d = distance_km(from, &fix.coordinates);
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, fix));
        }
    }
    best.map(|(_, fix)| fix)
}

/// Everything a unit may touch during `advance` besides itself.
pub struct TickContext<'a> {
    /// Simulated time at the end of this tick.
    pub time: f64,
    pub bases: &'a dyn BaseLocator,
    events: &'a mut Vec<ScenarioEvent>,
}

impl<'a> TickContext<'a> {
    pub fn new(time: f64, bases: &'a dyn BaseLocator, events: &'a mut Vec<ScenarioEvent>) -> Self {
        Self {
            time,
            bases,
            events,
        }
    }

    /// Record an event raised by `unit`.
    pub fn raise(&mut self, unit: &UnitCore, kind: EventKind) {
        self.events.push(ScenarioEvent {
            time: self.time,
            side_id: unit.side_id.clone(),
            unit_id: unit.id.clone(),
            kind,
        });
    }
}
