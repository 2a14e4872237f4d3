//! Spherical-earth navigation for the AIROPS kernel.
//!
//! Pure functions over [`Coordinates`]. Angles are degrees at the
//! boundary and radians inside; distances are kilometres on a sphere of
//! radius [`EARTH_RADIUS_KM`].

use airops_core::constants::{EARTH_RADIUS_KM, KM_PER_NAUTICAL_MILE, SECONDS_PER_HOUR};
use airops_core::Coordinates;

/// Initial great-circle bearing from `from` to `to`, degrees in [0, 360).
pub fn bearing(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_degrees(x.atan2(y).to_degrees())
}

/// Haversine distance in kilometres.
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Point reached by travelling `distance_km` from `origin` along the
/// great circle with initial bearing `bearing_deg`.
///
/// Longitude is wrapped into [-180, 180]; altitude is carried from `origin`.
pub fn destination(origin: &Coordinates, bearing_deg: f64, distance_km: f64) -> Coordinates {
    let lat1 = origin.latitude().to_radians();
    let lon1 = origin.longitude().to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    Coordinates::normalized(lat2.to_degrees(), lon2.to_degrees(), origin.altitude())
}

/// Kilometres covered in `dt_secs` at `speed_knots`.
pub fn travel_distance_km(speed_knots: f64, dt_secs: f64) -> f64 {
    speed_knots * dt_secs / SECONDS_PER_HOUR * KM_PER_NAUTICAL_MILE
}

/// Advance one tick from `origin` toward `target`.
///
/// The step is capped at the remaining distance, so a unit that would
/// pass the target ends the tick on it instead.
pub fn step(origin: &Coordinates, target: &Coordinates, speed_knots: f64, dt_secs: f64) -> Coordinates {
    let travel = travel_distance_km(speed_knots, dt_secs).min(distance_km(origin, target));
    destination(origin, bearing(origin, target), travel)
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon, 0.0).unwrap()
    }

    #[test]
    fn test_distance_zero_and_symmetric() {
        let a = at(51.4775, -0.4614);
        let b = at(40.6413, -73.7781);
        assert_eq!(distance_km(&a, &a), 0.0);
        assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        // Heathrow to JFK, roughly 5540 km.
        let d = distance_km(&a, &b);
        assert!((d - 5540.0).abs() < 20.0, "LHR-JFK should be ~5540 km, got {d}");
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_km(&at(0.0, 0.0), &at(0.0, 1.0));
        assert!((d - 111.195).abs() < 1e-2, "got {d}");
    }

    #[test]
    fn test_bearing_cardinals() {
        let origin = at(0.0, 0.0);
        assert!((bearing(&origin, &at(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing(&origin, &at(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(&origin, &at(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(&origin, &at(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_range() {
        let points = [at(10.0, 10.0), at(-60.0, 170.0), at(89.0, -179.0), at(0.0, 0.0)];
        for a in &points {
            for b in &points {
                let brg = bearing(a, b);
                assert!((0.0..360.0).contains(&brg), "bearing {brg} out of range");
            }
        }
    }

    #[test]
    fn test_destination_due_east() {
        let p = destination(&at(0.0, 0.0), 90.0, 111.19);
        assert!(p.latitude().abs() < 1e-3, "lat should stay ~0, got {}", p.latitude());
        assert!(
            (p.longitude() - 1.0).abs() < 1e-3,
            "lon should be ~1.0, got {}",
            p.longitude()
        );
    }

    #[test]
    fn test_destination_round_trip() {
        let origin = Coordinates::new(35.0, 139.0, 2_500.0).unwrap();
        for (brg, dist) in [(0.0, 10.0), (45.0, 250.0), (123.4, 800.0), (271.0, 3.5), (330.0, 1500.0)] {
            let p = destination(&origin, brg, dist);
            assert!(
                (distance_km(&origin, &p) - dist).abs() < 1e-6,
                "distance round trip failed for {brg}/{dist}"
            );
            let back = bearing(&origin, &p);
            let diff = (back - brg + 540.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 1e-6, "bearing round trip failed: {brg} -> {back}");
            assert_eq!(p.altitude(), 2_500.0);
        }
    }

    #[test]
    fn test_destination_crosses_antimeridian() {
        let p = destination(&at(0.0, 179.9), 90.0, 50.0);
        assert!(p.longitude() < -179.0, "should wrap to the western side, got {}", p.longitude());
        assert!(p.longitude() >= -180.0);
    }

    #[test]
    fn test_travel_distance() {
        // 300 kt for one hour is 300 nm.
        assert!((travel_distance_km(300.0, 3600.0) - 555.6).abs() < 1e-9);
        assert_eq!(travel_distance_km(450.0, 0.0), 0.0);
    }

    #[test]
    fn test_step_moves_toward_target() {
        let origin = at(40.0, -100.0);
        let target = at(41.0, -100.0);
        let next = step(&origin, &target, 600.0, 60.0);
        let moved = distance_km(&origin, &next);
        assert!((moved - travel_distance_km(600.0, 60.0)).abs() < 1e-6);
        assert!(distance_km(&next, &target) < distance_km(&origin, &target));
    }

    #[test]
    fn test_step_stops_at_target() {
        let origin = at(40.0, -100.0);
        let target = at(40.1, -99.9);
        let remaining = distance_km(&origin, &target);
        // One hour at 300 kt is far past a ~14 km leg.
        let next = step(&origin, &target, 300.0, 3600.0);
        assert!(distance_km(&next, &target) < 1e-6, "landed {} km off", distance_km(&next, &target));
        assert!((distance_km(&origin, &next) - remaining).abs() < 1e-6);
    }
}
