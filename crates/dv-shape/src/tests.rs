//! Unit tests for dv-shape.

#[cfg(test)]
mod diff {
    use dv_core::Polyline;

    use crate::find_differences;

    fn line(pairs: &[(f64, f64)]) -> Polyline {
        Polyline::from_pairs(pairs)
    }

    #[test]
    fn middle_change_is_padded_on_the_right() {
        let original = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        let updated = line(&[(0.0, 0.0), (1.0, 1.0), (1.0, 2.0), (0.0, 3.0)]);
        assert_eq!(
            find_differences(&original, &updated),
            line(&[(1.0, 1.0), (1.0, 2.0), (0.0, 3.0)])
        );
    }

    #[test]
    fn identical_shapes_have_no_difference() {
        let p = line(&[(0.0, 0.0), (0.0, 1.0), (5.0, 5.0)]);
        assert!(find_differences(&p, &p).is_empty());
        assert!(find_differences(&[], &[]).is_empty());
    }

    #[test]
    fn change_at_first_vertex() {
        let original = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        let updated = line(&[(9.0, 9.0), (0.0, 1.0), (0.0, 2.0)]);
        assert_eq!(find_differences(&original, &updated), line(&[(9.0, 9.0), (0.0, 1.0)]));
    }

    #[test]
    fn change_at_last_vertex_is_padded_on_the_left() {
        let original = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        let updated = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (9.0, 9.0)]);
        assert_eq!(find_differences(&original, &updated), line(&[(0.0, 2.0), (9.0, 9.0)]));
    }

    #[test]
    fn deleted_vertex_yields_connecting_pair() {
        let original = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        let updated = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]);
        assert_eq!(find_differences(&original, &updated), line(&[(0.0, 1.0), (0.0, 3.0)]));
    }

    #[test]
    fn trailing_append_is_not_reported() {
        let original = line(&[(0.0, 0.0), (0.0, 1.0)]);
        let updated = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        assert!(find_differences(&original, &updated).is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let original = line(&[(0.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        let updated = line(&[(0.0, 0.0), (0.0, 1.0)]);
        assert!(find_differences(&original, &updated).is_empty());
    }
}

#[cfg(test)]
mod merge {
    use dv_core::Polyline;

    use crate::merge_coordinates;

    fn line(pairs: &[(f64, f64)]) -> Polyline {
        Polyline::from_pairs(pairs)
    }

    #[test]
    fn splices_between_nearest_segments() {
        let base = line(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (11.0, 11.0)]);
        let insert = line(&[(0.0, 10.0), (5.0, 5.0), (10.0, 10.0)]);
        assert_eq!(
            merge_coordinates(&base, &insert),
            line(&[(0.0, 0.0), (0.0, 10.0), (5.0, 5.0), (10.0, 10.0), (11.0, 11.0)])
        );
    }

    #[test]
    fn detour_replaces_the_middle_of_a_street() {
        let base = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0)]);
        let insert = line(&[(0.0, 1.0), (0.5, 1.5), (0.5, 2.5), (0.0, 3.0)]);
        assert_eq!(
            merge_coordinates(&base, &insert),
            line(&[(0.0, 0.0), (0.0, 1.0), (0.5, 1.5), (0.5, 2.5), (0.0, 3.0), (0.0, 4.0)])
        );
    }

    #[test]
    fn degenerate_inputs_return_base() {
        let base = line(&[(0.0, 0.0), (0.0, 1.0)]);
        assert_eq!(merge_coordinates(&base, &[]), base);

        let single = line(&[(0.0, 0.0)]);
        let insert = line(&[(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(merge_coordinates(&single, &insert), single);
        assert!(merge_coordinates(&[], &insert).is_empty());
    }
}

#[cfg(test)]
mod can_merge {
    use dv_core::ShapeConfig;

    use crate::{can_merge, can_merge_with};

    const BASE: &str = "LINESTRING(174.7 -36.85,174.8 -36.85)";

    #[test]
    fn both_ends_on_the_base_shape() {
        let diversion = "LINESTRING(174.72 -36.85,174.73 -36.84,174.75 -36.85)";
        assert!(can_merge(BASE, diversion));
    }

    #[test]
    fn ends_within_threshold() {
        // 0.00009° of latitude ≈ 10 m
        let diversion = "LINESTRING(174.72 -36.85009,174.73 -36.84,174.75 -36.84991)";
        assert!(can_merge(BASE, diversion));
    }

    #[test]
    fn far_end_fails_even_with_good_start() {
        // end ≈ 1.1 km north of the base
        let diversion = "LINESTRING(174.72 -36.85,174.73 -36.84,174.75 -36.84)";
        assert!(!can_merge(BASE, diversion));
    }

    #[test]
    fn far_start_fails_even_with_good_end() {
        let diversion = "LINESTRING(174.72 -36.84,174.73 -36.84,174.75 -36.85)";
        assert!(!can_merge(BASE, diversion));
    }

    #[test]
    fn degenerate_shapes_cannot_merge() {
        assert!(!can_merge(BASE, "LINESTRING()"));
        assert!(!can_merge("LINESTRING()", "LINESTRING(174.72 -36.85)"));
        assert!(!can_merge("LINESTRING(174.72 -36.85)", "LINESTRING(174.72 -36.85)"));
    }

    #[test]
    fn configured_threshold_is_used() {
        // end ≈ 500 m off the base
        let diversion = "LINESTRING(174.72 -36.85,174.75 -36.8455)";
        assert!(!can_merge(BASE, diversion));
        let loose = ShapeConfig::default().with_merge_distance(1_000.0);
        assert!(can_merge_with(BASE, diversion, &loose));
    }
}

#[cfg(test)]
mod cleanup {
    use dv_core::ShapeConfig;

    use crate::{remove_duplicate_points, remove_duplicate_points_with};

    #[test]
    fn loop_within_window_collapses() {
        assert_eq!(
            remove_duplicate_points("LINESTRING(1 1,2 2,3 3,1 1)", 3.0),
            "LINESTRING(1 1)"
        );
    }

    #[test]
    fn repeat_beyond_window_is_kept() {
        let wkt = "LINESTRING(1 1,2 2,3 3,4 4,1 1)";
        assert_eq!(remove_duplicate_points(wkt, 3.0), wkt);
        assert_eq!(remove_duplicate_points(wkt, 4.0), "LINESTRING(1 1)");
    }

    #[test]
    fn invalid_window_is_a_no_op() {
        let wkt = "LINESTRING(1 1,2 2,1 1)";
        for n in [0.0, -1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert_eq!(remove_duplicate_points(wkt, n), wkt, "n = {n}");
        }
    }

    #[test]
    fn consecutive_duplicate_with_window_one() {
        assert_eq!(
            remove_duplicate_points("LINESTRING(1 1,1 1,2 2)", 1.0),
            "LINESTRING(1 1,2 2)"
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            remove_duplicate_points("LINESTRING(1 1,2 2,1 1,3 3,1 1)", 4.0),
            "LINESTRING(1 1,3 3,1 1)"
        );
    }

    #[test]
    fn removed_vertices_do_not_start_new_runs() {
        assert_eq!(
            remove_duplicate_points("LINESTRING(1 1,2 2,1 1,2 2)", 2.0),
            "LINESTRING(1 1,2 2)"
        );
    }

    #[test]
    fn output_is_canonical_comma_joined() {
        assert_eq!(
            remove_duplicate_points("LINESTRING(1 1, 2 2, 1 1, 5 5)", 3.0),
            "LINESTRING(1 1,5 5)"
        );
    }

    #[test]
    fn output_format_does_not_depend_on_removal() {
        assert_eq!(
            remove_duplicate_points("LINESTRING (1 1, 2 2, 3 3)", 3.0),
            "LINESTRING(1 1,2 2,3 3)"
        );
        assert_eq!(
            remove_duplicate_points("LINESTRING (1 1, 2 2, 1 1, 3 3)", 3.0),
            "LINESTRING(1 1,3 3)"
        );
        assert_eq!(
            remove_duplicate_points("linestring( 174.75   -36.85 ,174.76 -36.86 )", 3.0),
            "LINESTRING(174.75 -36.85,174.76 -36.86)"
        );
    }

    #[test]
    fn empty_linestring_is_unchanged() {
        assert_eq!(remove_duplicate_points("LINESTRING()", 3.0), "LINESTRING()");
    }

    #[test]
    fn configured_window() {
        let cfg = ShapeConfig::default().with_duplicate_window(4);
        assert_eq!(
            remove_duplicate_points_with("LINESTRING(1 1,2 2,3 3,4 4,1 1)", &cfg),
            "LINESTRING(1 1)"
        );
    }
}
