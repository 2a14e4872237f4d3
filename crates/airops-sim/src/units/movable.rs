//! Route-following kinematics and fuel burn.

use std::collections::VecDeque;

use tracing::debug;

use airops_core::constants::{SECONDS_PER_HOUR, WAYPOINT_ARRIVAL_THRESHOLD_KM};
use airops_core::enums::UnitKind;
use airops_core::events::EventKind;
use airops_core::params::MovableUnitParameters;
use airops_core::{CoordinateError, Coordinates};
use airops_geo::{bearing, distance_km, step};

use super::{SimUnit, TickContext, UnitCore};

/// What one call to [`MovableUnit::update`] did to the unit's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Route empty; nothing changed.
    Idle,
    /// Moved toward the front waypoint.
    Moved,
    /// Snapped to the front waypoint and popped it.
    WaypointReached(Coordinates),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOutcome {
    pub motion: Motion,
    /// This update's burn took fuel from above zero to at or below zero.
    pub out_of_fuel: bool,
}

impl MovementOutcome {
    const IDLE: MovementOutcome = MovementOutcome {
        motion: Motion::Idle,
        out_of_fuel: false,
    };
}

/// A unit that flies a FIFO route of waypoints and burns fuel while it does.
#[derive(Debug, Clone, PartialEq)]
pub struct MovableUnit {
    core: UnitCore,
    /// Degrees, [0, 360).
    heading: f64,
    speed_knots: f64,
    current_fuel_lbs: f64,
    max_fuel_lbs: f64,
    fuel_rate_lbs_per_hour: f64,
    route: VecDeque<Coordinates>,
}

impl MovableUnit {
    pub fn new(params: MovableUnitParameters) -> Self {
        Self {
            core: params.unit.into(),
            heading: normalize_heading(params.heading),
            speed_knots: params.speed_knots.max(0.0),
            current_fuel_lbs: params.current_fuel_lbs,
            max_fuel_lbs: params.max_fuel_lbs,
            fuel_rate_lbs_per_hour: params.fuel_rate_lbs_per_hour,
            route: params.route.into(),
        }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed_knots(&self) -> f64 {
        self.speed_knots
    }

    pub fn current_fuel_lbs(&self) -> f64 {
        self.current_fuel_lbs
    }

    pub fn max_fuel_lbs(&self) -> f64 {
        self.max_fuel_lbs
    }

    pub fn fuel_rate_lbs_per_hour(&self) -> f64 {
        self.fuel_rate_lbs_per_hour
    }

    /// Remaining waypoints, next first.
    pub fn route(&self) -> &VecDeque<Coordinates> {
        &self.route
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = normalize_heading(heading);
    }

    /// Negative speeds are stored as zero.
    pub fn set_speed_knots(&mut self, speed_knots: f64) {
        self.speed_knots = speed_knots.max(0.0);
    }

    pub fn set_current_fuel_lbs(&mut self, fuel: f64) {
        self.current_fuel_lbs = fuel;
    }

    pub fn set_max_fuel_lbs(&mut self, fuel: f64) {
        self.max_fuel_lbs = fuel;
    }

    pub fn set_fuel_rate_lbs_per_hour(&mut self, rate: f64) {
        self.fuel_rate_lbs_per_hour = rate;
    }

    /// Append a waypoint to the back of the route.
    pub fn add_point_to_route(
        &mut self,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<(), CoordinateError> {
        let point = Coordinates::new(latitude, longitude, altitude)?;
        self.route.push_back(point);
        Ok(())
    }

    /// Drop the next `count` waypoints. No-op unless `0 < count <= len`.
    pub fn clear_first_n_points_from_route(&mut self, count: usize) {
        if count == 0 || count > self.route.len() {
            return;
        }
        self.route.drain(..count);
    }

    /// Drop the last `count` waypoints. No-op unless `0 < count <= len`.
    pub fn clear_last_n_points_from_route(&mut self, count: usize) {
        if count == 0 || count > self.route.len() {
            return;
        }
        self.route.truncate(self.route.len() - count);
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    /// Replace the whole route.
    pub fn set_route(&mut self, route: impl IntoIterator<Item = Coordinates>) {
        self.route = route.into_iter().collect();
    }

    /// Advance along the route by `dt` seconds.
    ///
    /// An empty route is a no-op: no movement and no fuel burn. Otherwise the
    /// unit either snaps to a waypoint closer than 10 m or moves toward it at
    /// its current speed, never past it, then burns `fuel_rate / 3600 * dt`
    /// pounds.
    pub fn update(&mut self, dt: f64) -> MovementOutcome {
        let Some(waypoint) = self.route.front().copied() else {
            return MovementOutcome::IDLE;
        };

        let position = self.core.coordinates;
        let motion = if distance_km(&position, &waypoint) < WAYPOINT_ARRIVAL_THRESHOLD_KM {
            self.core.coordinates.set_horizontal(&waypoint);
            self.route.pop_front();
            Motion::WaypointReached(waypoint)
        } else {
            let next = step(&position, &waypoint, self.speed_knots, dt);
            self.core.coordinates.set_horizontal(&next);
            // Keep the course flown when the step ends on the waypoint.
            self.heading = if distance_km(&next, &waypoint) < WAYPOINT_ARRIVAL_THRESHOLD_KM {
                bearing(&position, &waypoint)
            } else {
                bearing(&next, &waypoint)
            };
            Motion::Moved
        };

        let had_fuel = self.current_fuel_lbs > 0.0;
        self.current_fuel_lbs -= self.fuel_rate_lbs_per_hour / SECONDS_PER_HOUR * dt;

        MovementOutcome {
            motion,
            out_of_fuel: had_fuel && self.current_fuel_lbs <= 0.0,
        }
    }

    /// Turn an update outcome into events on `ctx`.
    pub(crate) fn report(&self, outcome: MovementOutcome, ctx: &mut TickContext<'_>) {
        if let Motion::WaypointReached(waypoint) = outcome.motion {
            debug!(
                unit = %self.core.id,
                remaining = self.route.len(),
                "waypoint reached"
            );
            ctx.raise(
                &self.core,
                EventKind::WaypointReached {
                    waypoint,
                    remaining: self.route.len(),
                },
            );
        }
        if outcome.out_of_fuel {
            debug!(unit = %self.core.id, fuel_lbs = self.current_fuel_lbs, "out of fuel");
            ctx.raise(
                &self.core,
                EventKind::OutOfFuel {
                    fuel_lbs: self.current_fuel_lbs,
                },
            );
        }
    }
}

impl SimUnit for MovableUnit {
    fn core(&self) -> &UnitCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut UnitCore {
        &mut self.core
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Movable
    }

    fn advance(&mut self, dt: f64, ctx: &mut TickContext<'_>) {
        let outcome = self.update(dt);
        self.report(outcome, ctx);
    }
}

fn normalize_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
