//! Error types shared by every crate in the workspace.

use thiserror::Error;

/// A latitude or longitude outside its valid range.
///
/// Carries the rejected value. The coordinate that raised it keeps its
/// previous state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude must be between -90 and 90 degrees, got {0}")]
    Latitude(f64),
    #[error("longitude must be between -180 and 180 degrees, got {0}")]
    Longitude(f64),
}
