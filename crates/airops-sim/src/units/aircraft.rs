//! Aircraft: a movable unit with a home base and return-to-base behaviour.

use tracing::info;

use airops_core::constants::BASE_LANDING_THRESHOLD_KM;
use airops_core::enums::UnitKind;
use airops_core::events::EventKind;
use airops_core::params::AircraftParameters;
use airops_geo::distance_km;

use super::{BaseFix, BaseLocator, MovableUnit, SimUnit, TickContext, UnitCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    movable: MovableUnit,
    /// Soft reference; never checked against the scenario's airbases.
    home_base_id: String,
    return_to_base: bool,
    /// Soft reference; empty means no target.
    target_id: String,
    /// `ReturnedToBase` already raised for the current stay in landing range.
    arrival_reported: bool,
}

impl Aircraft {
    pub fn new(params: AircraftParameters) -> Self {
        Self {
            movable: MovableUnit::new(params.movable),
            home_base_id: params.home_base_id,
            return_to_base: params.return_to_base,
            target_id: params.target_id,
            arrival_reported: false,
        }
    }

    pub fn movable(&self) -> &MovableUnit {
        &self.movable
    }

    pub fn movable_mut(&mut self) -> &mut MovableUnit {
        &mut self.movable
    }

    pub fn home_base_id(&self) -> &str {
        &self.home_base_id
    }

    pub fn return_to_base(&self) -> bool {
        self.return_to_base
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn set_home_base_id(&mut self, id: impl Into<String>) {
        self.home_base_id = id.into();
        self.arrival_reported = false;
    }

    /// Setting the flag again re-arms the `ReturnedToBase` report.
    pub fn set_return_to_base(&mut self, return_to_base: bool) {
        self.return_to_base = return_to_base;
        self.arrival_reported = false;
    }

    pub fn set_target_id(&mut self, id: impl Into<String>) {
        self.target_id = id.into();
    }

    /// The base this aircraft would return to right now.
    pub fn resolve_home_base(&self, bases: &dyn BaseLocator) -> Option<BaseFix> {
        let core = self.movable.core();
        bases.resolve_home(&self.home_base_id, &core.side_id, &core.coordinates)
    }

    /// The home base, if RTB is set and the aircraft is within landing
    /// distance of it.
    fn base_in_landing_range(&self, bases: &dyn BaseLocator) -> Option<BaseFix> {
        if !self.return_to_base {
            return None;
        }
        let base = self.resolve_home_base(bases)?;
        let d = distance_km(&self.movable.core().coordinates, &base.coordinates);
        (d < BASE_LANDING_THRESHOLD_KM).then_some(base)
    }
}

impl SimUnit for Aircraft {
    fn core(&self) -> &UnitCore {
        self.movable.core()
    }

    fn core_mut(&mut self) -> &mut UnitCore {
        self.movable.core_mut()
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Aircraft
    }

    fn advance(&mut self, dt: f64, ctx: &mut TickContext<'_>) {
        if let Some(base) = self.base_in_landing_range(ctx.bases) {
            if !self.arrival_reported {
                info!(aircraft = %self.id(), base = %base.id, "returned to base");
                ctx.raise(self.core(), EventKind::ReturnedToBase { base_id: base.id });
                self.arrival_reported = true;
            }
            return;
        }
        self.arrival_reported = false;
        let outcome = self.movable.update(dt);
        self.movable.report(outcome, ctx);
    }
}
