//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The closed set of unit variants the kernel knows how to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitKind {
    /// A mobile unit with no air-specific behaviour.
    Movable,
    /// A mobile unit with home-base and return-to-base behaviour.
    Aircraft,
    /// A fixed installation holding based-aircraft inventory.
    Airbase,
}
