use coordcalc_core::{
    ChamferCalculator, ChamferParameters, CornerDirection, Point, Scenario, EPSILON,
};

fn approach(corner: Point, angle: f64, distance: f64, direction: CornerDirection) -> Point {
    let params = ChamferParameters::new(corner.x, corner.y, angle, distance, direction).unwrap();
    ChamferCalculator::calculate_outer_chamfer_approach(&params).approach_point
}

#[test]
fn test_top_left_45_lies_at_135_degrees() {
    let corner = Point::new(0.0, 0.0);
    let p = approach(corner, 45.0, 3.0, CornerDirection::TopLeft);

    assert!((p.distance_to(&corner) - 3.0).abs() < EPSILON);
    let angle = p.y.atan2(p.x).to_degrees();
    assert!((angle - 135.0).abs() < 1e-9);
}

#[test]
fn test_each_direction_lands_in_expected_quadrant() {
    let corner = Point::new(100.0, 50.0);
    // (approach heading, sign of dx, sign of dy)
    let cases = [
        (CornerDirection::TopLeft, -1.0, 1.0),
        (CornerDirection::TopRight, 1.0, 1.0),
        (CornerDirection::BottomLeft, -1.0, -1.0),
        (CornerDirection::BottomRight, 1.0, -1.0),
    ];

    for (direction, sx, sy) in cases {
        let p = approach(corner, 30.0, 2.0, direction);
        assert!((p.x - corner.x) * sx > 0.0, "{} x side", direction);
        assert!((p.y - corner.y) * sy > 0.0, "{} y side", direction);
    }
}

#[test]
fn test_distance_preserved_for_all_directions() {
    let corner = Point::new(-12.5, 7.25);
    for direction in CornerDirection::ALL {
        for angle in [1.0, 30.0, 45.0, 60.0, 89.0] {
            let p = approach(corner, angle, 2.0, direction);
            assert!(
                (p.distance_to(&corner) - 2.0).abs() < EPSILON,
                "{} at {} degrees",
                direction,
                angle
            );
        }
    }
}

#[test]
fn test_top_right_table_entry() {
    // 180 + 30 for the bevel, reversed to 30 degrees for the approach
    let p = approach(Point::new(0.0, 0.0), 30.0, 2.0, CornerDirection::TopRight);
    assert!((p.x - 3f64.sqrt()).abs() < 1e-12);
    assert!((p.y - 1.0).abs() < 1e-12);
}

#[test]
fn test_outer_chamfer_scenario_matches_calculator() {
    let params =
        ChamferParameters::new(5.0, 5.0, 60.0, 1.5, CornerDirection::BottomLeft).unwrap();
    assert_eq!(
        Scenario::OuterChamfer.calculate(&params),
        Some(ChamferCalculator::calculate_outer_chamfer_approach(&params))
    );
}

#[test]
fn test_result_carries_inputs() {
    let params =
        ChamferParameters::new(-3.0, 4.0, 45.0, 2.5, CornerDirection::BottomRight).unwrap();
    let result = ChamferCalculator::calculate_outer_chamfer_approach(&params);
    assert_eq!(result.corner_point, Point::new(-3.0, 4.0));
    assert_eq!(result.chamfer_angle, 45.0);
    assert_eq!(result.approach_distance, 2.5);
}
