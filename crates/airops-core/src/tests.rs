#[cfg(test)]
mod tests {
    use crate::commands::HostCommand;
    use crate::constants::DEFAULT_SIDE_COLOR;
    use crate::enums::UnitKind;
    use crate::error::CoordinateError;
    use crate::events::{EventKind, ScenarioEvent};
    use crate::params::*;
    use crate::state::ScenarioSnapshot;
    use crate::types::Coordinates;

    #[test]
    fn test_coordinates_read_back_exact() {
        let samples = [
            (0.0, 0.0, 0.0),
            (90.0, 180.0, 35_000.0),
            (-90.0, -180.0, -12.5),
            (40.712_776, -74.005_974, 1_000.0),
            (-33.868_82, 151.209_296, 0.1),
        ];
        for (lat, lon, alt) in samples {
            let c = Coordinates::new(lat, lon, alt).unwrap();
            assert_eq!(c.latitude(), lat);
            assert_eq!(c.longitude(), lon);
            assert_eq!(c.altitude(), alt);
        }
    }

    #[test]
    fn test_coordinates_reject_out_of_range() {
        assert_eq!(
            Coordinates::new(90.000_1, 0.0, 0.0),
            Err(CoordinateError::Latitude(90.000_1))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5, 0.0),
            Err(CoordinateError::Longitude(-180.5))
        );
        assert!(Coordinates::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_setters_keep_previous_value_on_error() {
        let mut c = Coordinates::new(10.0, 20.0, 300.0).unwrap();

        assert!(c.set_latitude(91.0).is_err());
        assert!(c.set_longitude(-181.0).is_err());
        assert!(c.set_latitude(f64::NAN).is_err());
        assert_eq!(c.latitude(), 10.0);
        assert_eq!(c.longitude(), 20.0);

        c.set_latitude(-45.0).unwrap();
        c.set_longitude(179.0).unwrap();
        c.set_altitude(-50_000.0);
        assert_eq!(c, Coordinates::new(-45.0, 179.0, -50_000.0).unwrap());
    }

    #[test]
    fn test_coordinates_normalized_wraps_longitude() {
        let c = Coordinates::normalized(95.0, 190.0, 7.0);
        assert_eq!(c.latitude(), 90.0);
        assert!(
            (c.longitude() - -170.0).abs() < 1e-9,
            "190 should wrap to -170, got {}",
            c.longitude()
        );
        assert_eq!(c.altitude(), 7.0);

        let c = Coordinates::normalized(0.0, -540.0, 0.0);
        assert!((c.longitude() - -180.0).abs() < 1e-9);

        // In-range values pass through untouched, including the +180 edge.
        let c = Coordinates::normalized(12.0, 180.0, 0.0);
        assert_eq!(c.longitude(), 180.0);
    }

    #[test]
    fn test_coordinates_deserialize_validates() {
        let c: Coordinates =
            serde_json::from_str(r#"{"latitude": 1.5, "longitude": 2.5}"#).unwrap();
        assert_eq!(c.altitude(), 0.0);

        let bad = serde_json::from_str::<Coordinates>(r#"{"latitude": 100, "longitude": 0}"#);
        assert!(bad.is_err(), "latitude 100 must be rejected on deserialize");
    }

    #[test]
    fn test_unit_kind_serde() {
        for v in [UnitKind::Movable, UnitKind::Aircraft, UnitKind::Airbase] {
            let json = serde_json::to_string(&v).unwrap();
            let back: UnitKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert_eq!(serde_json::to_string(&UnitKind::Airbase).unwrap(), "\"airbase\"");
    }

    /// Parameter records are a flat camelCase contract with the host.
    #[test]
    fn test_aircraft_parameters_flat_wire_form() {
        let json = r#"{
            "id": "ac-1",
            "name": "Viper 1",
            "className": "F-16C",
            "sideId": "blue",
            "coordinates": {"latitude": 40.0, "longitude": -100.0, "altitude": 10000.0},
            "speedKnots": 350.0,
            "currentFuelLbs": 4000.0,
            "maxFuelLbs": 5000.0,
            "fuelRateLbsPerHour": 300.0,
            "route": [{"latitude": 40.5, "longitude": -99.5}],
            "homeBaseId": "ab-1",
            "returnToBase": false
        }"#;
        let params: AircraftParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.movable.unit.id, "ac-1");
        assert_eq!(params.movable.unit.class_name, "F-16C");
        assert!(!params.movable.unit.selected);
        assert_eq!(params.movable.speed_knots, 350.0);
        assert_eq!(params.movable.heading, 0.0);
        assert_eq!(params.movable.route.len(), 1);
        assert_eq!(params.home_base_id, "ab-1");
        assert!(params.target_id.is_empty());

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["sideId"], "blue");
        assert_eq!(value["fuelRateLbsPerHour"], 300.0);
        assert!(value.get("movable").is_none(), "flattened record must stay flat");
    }

    #[test]
    fn test_parameters_reject_invalid_coordinates() {
        let json = r#"{
            "id": "ab-1", "name": "Base", "className": "Airfield", "sideId": "red",
            "coordinates": {"latitude": 0.0, "longitude": 200.0}
        }"#;
        assert!(serde_json::from_str::<AirbaseParameters>(json).is_err());
    }

    #[test]
    fn test_side_color_defaults() {
        let side: SideParameters = serde_json::from_str(r#"{"id": "red", "name": "Red"}"#).unwrap();
        assert_eq!(side.color, DEFAULT_SIDE_COLOR);
        assert_eq!(side.total_score, 0.0);
        assert_eq!(SideParameters::default().color, "#FFFFFF");
    }

    #[test]
    fn test_scenario_parameters_defaults() {
        let params: ScenarioParameters =
            serde_json::from_str(r#"{"id": "s", "name": "Test"}"#).unwrap();
        assert_eq!(params.time_compression, 1.0);
        assert_eq!(params.current_time, 0.0);
    }

    #[test]
    fn test_host_command_serde() {
        let commands = vec![
            HostCommand::AddPointToRoute {
                side_id: "blue".into(),
                aircraft_id: "ac-1".into(),
                latitude: 1.0,
                longitude: 2.0,
                altitude: 3.0,
            },
            HostCommand::ClearFirstNPointsFromRoute {
                side_id: "blue".into(),
                aircraft_id: "ac-1".into(),
                count: 2,
            },
            HostCommand::ClearRoute {
                side_id: "blue".into(),
                aircraft_id: "ac-1".into(),
            },
            HostCommand::ToggleReturnToBase {
                side_id: "blue".into(),
                aircraft_id: "ac-1".into(),
            },
            HostCommand::SetTimeCompression {
                time_compression: 4.0,
            },
            HostCommand::AddSide(SideParameters::default()),
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: HostCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let cmd: HostCommand = serde_json::from_str(
            r#"{"type": "ClearRoute", "sideId": "red", "aircraftId": "ac-9"}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            HostCommand::ClearRoute {
                side_id: "red".into(),
                aircraft_id: "ac-9".into()
            }
        );
    }

    #[test]
    fn test_event_serde() {
        let event = ScenarioEvent {
            time: 12.0,
            side_id: "blue".into(),
            unit_id: "ac-1".into(),
            kind: EventKind::ReturnedToBase {
                base_id: "ab-1".into(),
            },
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"]["type"], "ReturnedToBase");
        assert_eq!(value["kind"]["baseId"], "ab-1");
        let back: ScenarioEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.kind.label(), "returned-to-base");
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = ScenarioSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ScenarioSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(
            json.len() < 512,
            "Empty snapshot should be small, was {} bytes",
            json.len()
        );
    }
}
