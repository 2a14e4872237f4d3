//! Simulation kernel for AIROPS.
//!
//! Owns the unit hierarchy and the `Scenario` aggregate, advances all
//! units once per host tick, and produces `ScenarioSnapshot`s for the
//! host. Headless: nothing here renders or talks to a runtime.

pub mod config;
pub mod error;
pub mod hooks;
pub mod load_test;
pub mod scenario;
pub mod side;
pub mod snapshot;
pub mod units;

pub use airops_core as core;
pub use config::{DuplicatePolicy, ScenarioConfig, ScenarioFile};
pub use error::{ConfigError, ScenarioError};
pub use hooks::{HookCommands, LandingHook, ScenarioHook};
pub use scenario::{AirbaseHandle, AircraftHandle, Scenario};
pub use side::Side;
pub use units::{
    Aircraft, Airbase, BaseFix, BaseList, BaseLocator, MovableUnit, SimUnit, TickContext, UnitCore,
};
