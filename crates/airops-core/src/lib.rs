//! Core types and definitions for the AIROPS simulation kernel.
//!
//! This crate defines the vocabulary shared across all other crates:
//! coordinates, parameter records, host commands, events, snapshot
//! views, constants, and errors. It has no dependency on the simulation
//! engine or on any host runtime.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod params;
pub mod state;
pub mod types;

pub use error::CoordinateError;
pub use types::Coordinates;

#[cfg(test)]
mod tests;
