//! The scenario aggregate: sides, airbases, aircraft and simulated time.
//!
//! Airbases and aircraft live in a hecs `World`; two entity lists keep
//! their insertion order, which is both lookup order and update order.
//! Handles wrap the generational `Entity`, so a handle to a removed unit
//! stays detectably stale even after its slot is reused.

use hecs::{Component, Entity, Ref, World};
use tracing::{debug, info, warn};

use airops_core::commands::HostCommand;
use airops_core::constants::DEFAULT_TIME_COMPRESSION;
use airops_core::events::ScenarioEvent;
use airops_core::params::{
    AircraftParameters, AirbaseParameters, ScenarioParameters, SideParameters,
};
use airops_core::state::ScenarioSnapshot;

use crate::config::{DuplicatePolicy, ScenarioConfig};
use crate::error::ScenarioError;
use crate::hooks::{HookCommands, ScenarioHook};
use crate::side::Side;
use crate::snapshot;
use crate::units::{Aircraft, Airbase, BaseFix, BaseList, SimUnit, TickContext};

/// Stable reference to an aircraft in a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AircraftHandle(Entity);

/// Stable reference to an airbase in a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirbaseHandle(Entity);

pub struct Scenario {
    id: String,
    name: String,
    start_time: f64,
    current_time: f64,
    duration_seconds: f64,
    time_compression: f64,
    config: ScenarioConfig,
    sides: Vec<Side>,
    units: World,
    airbases: Vec<Entity>,
    aircraft: Vec<Entity>,
    events: Vec<ScenarioEvent>,
    hooks: Vec<Box<dyn ScenarioHook>>,
}

impl Scenario {
    pub fn new(params: ScenarioParameters) -> Self {
        Self::with_config(params, ScenarioConfig::default())
    }

    pub fn with_config(params: ScenarioParameters, config: ScenarioConfig) -> Self {
        Self {
            id: params.id,
            name: params.name,
            start_time: params.start_time,
            current_time: params.current_time,
            duration_seconds: params.duration_seconds,
            time_compression: sanitize_compression(params.time_compression),
            config,
            sides: Vec::new(),
            units: World::new(),
            airbases: Vec::new(),
            aircraft: Vec::new(),
            events: Vec::new(),
            hooks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn time_compression(&self) -> f64 {
        self.time_compression
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Negative values are stored as 0 (paused) and NaN as 1, so
    /// `current_time` never runs backwards.
    pub fn set_time_compression(&mut self, time_compression: f64) {
        self.time_compression = sanitize_compression(time_compression);
        debug!(time_compression = self.time_compression, "time compression set");
    }

    /// Simulated seconds since `start_time`.
    pub fn elapsed_seconds(&self) -> f64 {
        self.current_time - self.start_time
    }

    /// A non-positive duration never completes.
    pub fn is_complete(&self) -> bool {
        self.duration_seconds > 0.0 && self.elapsed_seconds() >= self.duration_seconds
    }

    // --- Tick ---

    /// Advance the scenario by `dt` host seconds.
    ///
    /// Simulated time moves by `dt * time_compression`. Every airbase and
    /// then every aircraft is advanced by that step in insertion order.
    /// Raised events go to the hooks, and commands the hooks queued are
    /// applied before this returns.
    pub fn update(&mut self, dt: f64) {
        let step = dt * self.time_compression;
        self.current_time += step;

        let fixes = self.base_fixes();
        let bases = BaseList::new(&fixes);
        let mut raised = Vec::new();
        {
            let mut ctx = TickContext::new(self.current_time, &bases, &mut raised);
            for &entity in &self.airbases {
                if let Ok(mut airbase) = self.units.get::<&mut Airbase>(entity) {
                    airbase.advance(step, &mut ctx);
                }
            }
            for &entity in &self.aircraft {
                if let Ok(mut aircraft) = self.units.get::<&mut Aircraft>(entity) {
                    aircraft.advance(step, &mut ctx);
                }
            }
        }

        self.dispatch(raised);
    }

    /// Run `ticks` updates of `dt` each, calling `hook` after every one.
    pub fn run_with_hook<F>(&mut self, ticks: u64, dt: f64, mut hook: F)
    where
        F: FnMut(&Scenario),
    {
        for _ in 0..ticks {
            self.update(dt);
            hook(self);
        }
    }

    pub fn add_hook(&mut self, hook: impl ScenarioHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Take every buffered event. Empty unless `emit_events` is set.
    pub fn drain_events(&mut self) -> Vec<ScenarioEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[ScenarioEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> ScenarioSnapshot {
        snapshot::build_snapshot(self)
    }

    fn dispatch(&mut self, raised: Vec<ScenarioEvent>) {
        if raised.is_empty() {
            return;
        }

        let mut commands = HookCommands::default();
        for event in &raised {
            for hook in &mut self.hooks {
                hook.on_event(event, &mut commands);
            }
        }
        if self.config.emit_events {
            self.events.extend(raised);
        }

        for command in commands.into_inner() {
            // Rejections are logged by apply_command.
            let _ = self.apply_command(command);
        }
    }

    // --- Sides ---

    pub fn add_side(&mut self, params: SideParameters) -> Result<(), ScenarioError> {
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.get_side_by_id(&params.id).is_some()
        {
            warn!(side = %params.id, "duplicate side rejected");
            return Err(ScenarioError::DuplicateSide { id: params.id });
        }
        debug!(side = %params.id, "side added");
        self.sides.push(Side::new(params));
        Ok(())
    }

    pub fn get_side_by_id(&self, id: &str) -> Option<&Side> {
        self.sides.iter().find(|side| side.id() == id)
    }

    pub fn get_side_by_id_mut(&mut self, id: &str) -> Option<&mut Side> {
        self.sides.iter_mut().find(|side| side.id() == id)
    }

    /// Remove the first side with `id`. Units on that side are left alone.
    pub fn remove_side(&mut self, id: &str) -> Option<Side> {
        let index = self.sides.iter().position(|side| side.id() == id)?;
        debug!(side = %id, "side removed");
        Some(self.sides.remove(index))
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    // --- Airbases ---

    pub fn add_airbase(&mut self, params: AirbaseParameters) -> Result<AirbaseHandle, ScenarioError> {
        let (side_id, id) = (&params.unit.side_id, &params.unit.id);
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.find_airbase(side_id, id).is_some()
        {
            warn!(side = %side_id, airbase = %id, "duplicate airbase rejected");
            return Err(ScenarioError::DuplicateAirbase {
                side_id: side_id.clone(),
                id: id.clone(),
            });
        }
        debug!(side = %side_id, airbase = %id, "airbase added");
        let entity = self.units.spawn((Airbase::new(params),));
        self.airbases.push(entity);
        Ok(AirbaseHandle(entity))
    }

    pub fn find_airbase(&self, side_id: &str, id: &str) -> Option<AirbaseHandle> {
        self.find_unit::<Airbase>(&self.airbases, side_id, id)
            .map(AirbaseHandle)
    }

    /// `None` once the airbase has been removed.
    pub fn airbase(&self, handle: AirbaseHandle) -> Option<Ref<'_, Airbase>> {
        self.units.get::<&Airbase>(handle.0).ok()
    }

    pub fn airbase_mut(&mut self, handle: AirbaseHandle) -> Option<&mut Airbase> {
        self.units.query_one_mut::<&mut Airbase>(handle.0).ok()
    }

    pub fn get_airbase_by_id_and_side_id(&self, side_id: &str, id: &str) -> Option<Ref<'_, Airbase>> {
        self.airbase(self.find_airbase(side_id, id)?)
    }

    pub fn get_airbase_by_id_and_side_id_mut(&mut self, side_id: &str, id: &str) -> Option<&mut Airbase> {
        let handle = self.find_airbase(side_id, id)?;
        self.airbase_mut(handle)
    }

    pub fn remove_airbase(&mut self, side_id: &str, id: &str) -> Option<Airbase> {
        let entity = self.find_unit::<Airbase>(&self.airbases, side_id, id)?;
        self.airbases.retain(|&e| e != entity);
        let airbase = self.units.remove_one::<Airbase>(entity).ok();
        let _ = self.units.despawn(entity);
        debug!(side = %side_id, airbase = %id, "airbase removed");
        airbase
    }

    /// Airbases in insertion order.
    pub fn all_airbases(&self) -> impl Iterator<Item = Ref<'_, Airbase>> + '_ {
        self.airbases
            .iter()
            .filter_map(|&entity| self.units.get::<&Airbase>(entity).ok())
    }

    pub fn airbase_count(&self) -> usize {
        self.airbases.len()
    }

    // --- Aircraft ---

    pub fn add_aircraft(&mut self, params: AircraftParameters) -> Result<AircraftHandle, ScenarioError> {
        let unit = &params.movable.unit;
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.find_aircraft(&unit.side_id, &unit.id).is_some()
        {
            warn!(side = %unit.side_id, aircraft = %unit.id, "duplicate aircraft rejected");
            return Err(ScenarioError::DuplicateAircraft {
                side_id: unit.side_id.clone(),
                id: unit.id.clone(),
            });
        }
        debug!(side = %unit.side_id, aircraft = %unit.id, "aircraft added");
        let entity = self.units.spawn((Aircraft::new(params),));
        self.aircraft.push(entity);
        Ok(AircraftHandle(entity))
    }

    pub fn find_aircraft(&self, side_id: &str, id: &str) -> Option<AircraftHandle> {
        self.find_unit::<Aircraft>(&self.aircraft, side_id, id)
            .map(AircraftHandle)
    }

    /// `None` once the aircraft has been removed.
    pub fn aircraft(&self, handle: AircraftHandle) -> Option<Ref<'_, Aircraft>> {
        self.units.get::<&Aircraft>(handle.0).ok()
    }

    pub fn aircraft_mut(&mut self, handle: AircraftHandle) -> Option<&mut Aircraft> {
        self.units.query_one_mut::<&mut Aircraft>(handle.0).ok()
    }

    pub fn get_aircraft_by_id_and_side_id(&self, side_id: &str, id: &str) -> Option<Ref<'_, Aircraft>> {
        self.aircraft(self.find_aircraft(side_id, id)?)
    }

    pub fn get_aircraft_by_id_and_side_id_mut(&mut self, side_id: &str, id: &str) -> Option<&mut Aircraft> {
        let handle = self.find_aircraft(side_id, id)?;
        self.aircraft_mut(handle)
    }

    pub fn remove_aircraft(&mut self, side_id: &str, id: &str) -> Option<Aircraft> {
        let entity = self.find_unit::<Aircraft>(&self.aircraft, side_id, id)?;
        debug!(side = %side_id, aircraft = %id, "aircraft removed");
        self.despawn_aircraft(entity)
    }

    /// Aircraft in insertion order.
    pub fn all_aircraft(&self) -> impl Iterator<Item = Ref<'_, Aircraft>> + '_ {
        self.aircraft
            .iter()
            .filter_map(|&entity| self.units.get::<&Aircraft>(entity).ok())
    }

    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    /// Flip the aircraft's return-to-base flag and return the new state.
    ///
    /// Enabling resolves the home base (by id, else the nearest base of the
    /// aircraft's side), records it as the home base and replaces the route
    /// with a single waypoint over it. Disabling clears the route.
    pub fn toggle_return_to_base(&mut self, side_id: &str, id: &str) -> Option<bool> {
        let entity = self.find_unit::<Aircraft>(&self.aircraft, side_id, id)?;
        let fixes = self.base_fixes();
        let aircraft = self.units.query_one_mut::<&mut Aircraft>(entity).ok()?;

        if aircraft.return_to_base() {
            aircraft.set_return_to_base(false);
            aircraft.movable_mut().clear_route();
            info!(side = %side_id, aircraft = %id, "return to base cancelled");
            return Some(false);
        }

        aircraft.set_return_to_base(true);
        match aircraft.resolve_home_base(&BaseList::new(&fixes)) {
            Some(base) => {
                let mut waypoint = base.coordinates;
                waypoint.set_altitude(aircraft.coordinates().altitude());
                aircraft.set_home_base_id(base.id.clone());
                aircraft.movable_mut().set_route([waypoint]);
                info!(side = %side_id, aircraft = %id, base = %base.id, "returning to base");
            }
            None => {
                warn!(side = %side_id, aircraft = %id, "return to base set but no base found");
            }
        }
        Some(true)
    }

    /// Land a returning aircraft at its home base: the base gains one of the
    /// aircraft's class and the aircraft is removed. Returns the base id.
    ///
    /// Does nothing unless the aircraft exists, has RTB set and a home base
    /// resolves.
    pub fn land_aircraft(&mut self, side_id: &str, id: &str) -> Option<String> {
        let entity = self.find_unit::<Aircraft>(&self.aircraft, side_id, id)?;
        let fixes = self.base_fixes();
        let (base, class_name) = {
            let aircraft = self.units.get::<&Aircraft>(entity).ok()?;
            if !aircraft.return_to_base() {
                return None;
            }
            let base = aircraft.resolve_home_base(&BaseList::new(&fixes))?;
            (base, aircraft.class_name().to_string())
        };

        let airbase = self.get_airbase_by_id_and_side_id_mut(&base.side_id, &base.id)?;
        airbase.add_based_aircraft(&class_name, 1);
        self.despawn_aircraft(entity);
        info!(side = %side_id, aircraft = %id, base = %base.id, "aircraft landed");
        Some(base.id)
    }

    // --- Commands ---

    /// Apply a host command. Removals of missing units are no-ops; edits
    /// of a missing unit fail with `Unknown*`.
    pub fn apply_command(&mut self, command: HostCommand) -> Result<(), ScenarioError> {
        let result = self.handle_command(command);
        if let Err(err) = &result {
            warn!(%err, "command rejected");
        }
        result
    }

    fn handle_command(&mut self, command: HostCommand) -> Result<(), ScenarioError> {
        match command {
            HostCommand::AddSide(params) => self.add_side(params)?,
            HostCommand::RemoveSide { side_id } => {
                self.remove_side(&side_id);
            }
            HostCommand::AddAirbase(params) => {
                self.add_airbase(params)?;
            }
            HostCommand::RemoveAirbase {
                side_id,
                airbase_id,
            } => {
                self.remove_airbase(&side_id, &airbase_id);
            }
            HostCommand::AddAircraft(params) => {
                self.add_aircraft(params)?;
            }
            HostCommand::RemoveAircraft {
                side_id,
                aircraft_id,
            } => {
                self.remove_aircraft(&side_id, &aircraft_id);
            }
            HostCommand::AddPointToRoute {
                side_id,
                aircraft_id,
                latitude,
                longitude,
                altitude,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .movable_mut()
                    .add_point_to_route(latitude, longitude, altitude)?;
            }
            HostCommand::ClearFirstNPointsFromRoute {
                side_id,
                aircraft_id,
                count,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .movable_mut()
                    .clear_first_n_points_from_route(count);
            }
            HostCommand::ClearLastNPointsFromRoute {
                side_id,
                aircraft_id,
                count,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .movable_mut()
                    .clear_last_n_points_from_route(count);
            }
            HostCommand::ClearRoute {
                side_id,
                aircraft_id,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .movable_mut()
                    .clear_route();
            }
            HostCommand::ToggleReturnToBase {
                side_id,
                aircraft_id,
            } => {
                self.toggle_return_to_base(&side_id, &aircraft_id)
                    .ok_or_else(|| unknown_aircraft(&side_id, &aircraft_id))?;
            }
            HostCommand::LandAircraft {
                side_id,
                aircraft_id,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?;
                self.land_aircraft(&side_id, &aircraft_id);
            }
            HostCommand::SetSpeed {
                side_id,
                aircraft_id,
                speed_knots,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .movable_mut()
                    .set_speed_knots(speed_knots);
            }
            HostCommand::SetTarget {
                side_id,
                aircraft_id,
                target_id,
            } => {
                self.expect_aircraft(&side_id, &aircraft_id)?
                    .set_target_id(target_id);
            }
            HostCommand::AddBasedAircraft {
                side_id,
                airbase_id,
                class_name,
                count,
            } => {
                self.expect_airbase(&side_id, &airbase_id)?
                    .add_based_aircraft(&class_name, count);
            }
            HostCommand::RemoveBasedAircraft {
                side_id,
                airbase_id,
                class_name,
                count,
            } => {
                self.expect_airbase(&side_id, &airbase_id)?
                    .remove_based_aircraft(&class_name, count);
            }
            HostCommand::SetTimeCompression { time_compression } => {
                self.set_time_compression(time_compression);
            }
        }
        Ok(())
    }

    fn expect_aircraft(&mut self, side_id: &str, id: &str) -> Result<&mut Aircraft, ScenarioError> {
        self.get_aircraft_by_id_and_side_id_mut(side_id, id)
            .ok_or_else(|| unknown_aircraft(side_id, id))
    }

    fn expect_airbase(&mut self, side_id: &str, id: &str) -> Result<&mut Airbase, ScenarioError> {
        self.get_airbase_by_id_and_side_id_mut(side_id, id)
            .ok_or_else(|| ScenarioError::UnknownAirbase {
                side_id: side_id.to_string(),
                id: id.to_string(),
            })
    }

    // --- Internals ---

    /// First entity in `order` whose unit matches both keys.
    fn find_unit<T: SimUnit + Component>(&self, order: &[Entity], side_id: &str, id: &str) -> Option<Entity> {
        order.iter().copied().find(|&entity| {
            self.units
                .get::<&T>(entity)
                .map_or(false, |unit| unit.side_id() == side_id && unit.id() == id)
        })
    }

    fn despawn_aircraft(&mut self, entity: Entity) -> Option<Aircraft> {
        self.aircraft.retain(|&e| e != entity);
        let aircraft = self.units.remove_one::<Aircraft>(entity).ok();
        let _ = self.units.despawn(entity);
        aircraft
    }

    /// Positions of every airbase, in insertion order.
    fn base_fixes(&self) -> Vec<BaseFix> {
        self.all_airbases().map(|airbase| airbase.fix()).collect()
    }
}

fn unknown_aircraft(side_id: &str, id: &str) -> ScenarioError {
    ScenarioError::UnknownAircraft {
        side_id: side_id.to_string(),
        id: id.to_string(),
    }
}

fn sanitize_compression(time_compression: f64) -> f64 {
    if time_compression.is_nan() {
        DEFAULT_TIME_COMPRESSION
    } else {
        time_compression.max(0.0)
    }
}
