//! Unit tests for dv-stops.

#[cfg(test)]
mod unique {
    use crate::{Stop, get_unique_stops};

    fn stop(id: &str, route: &str, dir: Option<u8>) -> Stop {
        Stop::new(id, -36.85, 174.76).on_route(route, dir)
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let mut dup = stop("7001", "NX1", Some(0));
        dup.stop_name = "later copy".into();

        let stops = vec![
            stop("7001", "NX1", Some(0)),
            stop("7002", "NX1", Some(0)),
            dup,
            stop("7003", "NX1", Some(0)),
            stop("7002", "NX1", Some(0)),
        ];
        let unique = get_unique_stops(&stops);
        let ids: Vec<_> = unique.iter().map(|s| s.stop_id.as_str()).collect();
        assert_eq!(ids, ["7001", "7002", "7003"]);
        assert_eq!(unique[0].stop_name, "");
    }

    #[test]
    fn route_and_direction_are_part_of_the_key() {
        let stops = vec![
            stop("7001", "NX1", Some(0)),
            stop("7001", "NX1", Some(1)),
            stop("7001", "NX2", Some(0)),
            stop("7001", "NX1", None),
        ];
        assert_eq!(get_unique_stops(&stops), stops);
    }

    #[test]
    fn empty_input() {
        assert!(get_unique_stops(&[]).is_empty());
    }
}

#[cfg(test)]
mod affected {
    use dv_core::{EARTH_RADIUS_M, Polyline, ShapeConfig};

    use crate::{Stop, affected_stops, affected_stops_wkt, is_affected_stop, is_affected_stop_with};

    const SHAPE: &str = "LINESTRING(174.7 -36.85,174.75 -36.85,174.8 -36.85)";

    fn north_of_shape(id: &str, metres: f64, lon: f64) -> Stop {
        Stop::new(id, -36.85 + (metres / EARTH_RADIUS_M).to_degrees(), lon)
    }

    #[test]
    fn stop_on_the_shape_is_not_affected() {
        assert!(!is_affected_stop(&Stop::new("on-vertex", -36.85, 174.75), SHAPE));
        assert!(!is_affected_stop(&north_of_shape("close", 5.0, 174.72), SHAPE));
    }

    #[test]
    fn stop_far_from_the_shape_is_affected() {
        assert!(is_affected_stop(&north_of_shape("far", 200.0, 174.72), SHAPE));
        assert!(is_affected_stop(&north_of_shape("just-out", 25.0, 174.72), SHAPE));
    }

    #[test]
    fn empty_shape_affects_every_stop() {
        assert!(is_affected_stop(&Stop::new("any", -36.85, 174.75), "LINESTRING()"));
    }

    #[test]
    fn threshold_comes_from_config() {
        let stop = north_of_shape("mid", 50.0, 174.72);
        assert!(is_affected_stop_with(&stop, SHAPE, &ShapeConfig::default()));
        let loose = ShapeConfig::default().with_affected_stop_distance(100.0);
        assert!(!is_affected_stop_with(&stop, SHAPE, &loose));
    }

    #[test]
    fn batch_matches_one_by_one() {
        let stops: Vec<Stop> = [0.0, 5.0, 19.0, 21.0, 40.0, 500.0, 5_000.0]
            .iter()
            .enumerate()
            .flat_map(|(i, &m)| {
                [
                    north_of_shape(&format!("n{i}"), m, 174.73),
                    north_of_shape(&format!("s{i}"), -m, 174.79),
                    north_of_shape(&format!("e{i}"), m, 174.81),
                ]
            })
            .collect();

        let cfg = ShapeConfig::default();
        let expected: Vec<Stop> = stops
            .iter()
            .filter(|s| is_affected_stop_with(s, SHAPE, &cfg))
            .cloned()
            .collect();

        assert_eq!(affected_stops_wkt(&stops, SHAPE, &cfg), expected);
        assert!(!expected.is_empty());
        assert!(expected.len() < stops.len());
    }

    #[test]
    fn batch_against_empty_shape_returns_everything() {
        let stops = vec![Stop::new("a", -36.85, 174.75), Stop::new("b", -36.86, 174.76)];
        let got = affected_stops(&stops, &Polyline::empty(), &ShapeConfig::default());
        assert_eq!(got, stops);
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use dv_core::DirectionId;

    use crate::{StopError, load_stops_csv, load_stops_reader};

    const CSV: &[u8] = b"\
stopId,stopCode,stopName,stopLat,stopLon,routeId,directionId\n\
7001,7001,Britomart Train Station,-36.8441,174.7676,NX1,0\n\
7002, 7002 ,Customs St,-36.8449,174.7662,NX1,1\n\
7003,7003,Albert St,-36.8460,174.7640,NX1,\n\
";

    #[test]
    fn loads_camel_case_rows() {
        let stops = load_stops_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].stop_name, "Britomart Train Station");
        assert_eq!(stops[0].stop_lat, -36.8441);
        assert_eq!(stops[0].direction_id, Some(DirectionId(0)));
        assert_eq!(stops[1].stop_code, "7002"); // trimmed
        assert_eq!(stops[1].direction_id, Some(DirectionId(1)));
        assert_eq!(stops[2].direction_id, None);
    }

    #[test]
    fn loads_snake_case_with_optional_columns_missing() {
        let csv = b"stop_id,stop_lat,stop_lon\n8001,-36.9,174.8\n";
        let stops = load_stops_reader(Cursor::new(&csv[..])).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].stop_id, "8001");
        assert!(stops[0].route_id.is_empty());
        assert_eq!(stops[0].direction_id, None);
    }

    #[test]
    fn bad_coordinate_is_a_parse_error() {
        let csv = b"stopId,stopLat,stopLon\n8001,north,174.8\n";
        let err = load_stops_reader(Cursor::new(&csv[..])).unwrap_err();
        assert!(matches!(err, StopError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV).unwrap();
        let stops = load_stops_csv(file.path()).unwrap();
        assert_eq!(stops.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_stops_csv(std::path::Path::new("/nonexistent/stops.csv")).unwrap_err();
        assert!(matches!(err, StopError::Io(_)));
    }
}
