//! Simulation constants and navigation tuning parameters.

// --- Earth model ---

/// Mean Earth radius used by every great-circle computation (kilometers).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers in one nautical mile.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Seconds in one hour, for knots and lbs/hr conversions.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// --- Coordinate bounds (degrees) ---

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// --- Kinematics ---

/// A waypoint closer than this is considered reached (~10 meters).
pub const WAYPOINT_ARRIVAL_THRESHOLD_KM: f64 = 0.01;

/// An aircraft returning to base lands once it is within this range of the base.
pub const BASE_LANDING_THRESHOLD_KM: f64 = 0.5;

// --- Defaults ---

/// Color assigned to a side whose parameters omit one.
pub const DEFAULT_SIDE_COLOR: &str = "#FFFFFF";

/// Time compression for scenarios whose parameters omit one (1.0 = real time).
pub const DEFAULT_TIME_COMPRESSION: f64 = 1.0;
