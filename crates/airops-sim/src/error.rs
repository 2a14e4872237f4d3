//! Error types for the simulation kernel.

use thiserror::Error;

use airops_core::CoordinateError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("side {id:?} already exists")]
    DuplicateSide { id: String },
    #[error("airbase {id:?} already exists on side {side_id:?}")]
    DuplicateAirbase { side_id: String, id: String },
    #[error("aircraft {id:?} already exists on side {side_id:?}")]
    DuplicateAircraft { side_id: String, id: String },
    #[error("no aircraft {id:?} on side {side_id:?}")]
    UnknownAircraft { side_id: String, id: String },
    #[error("no airbase {id:?} on side {side_id:?}")]
    UnknownAirbase { side_id: String, id: String },
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Failure to read, parse or write a scenario file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("scenario file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),
}
