use coordcalc_core::records::{
    calculation_input_from_json, calculation_input_to_json, chamfer_parameters_from_json,
    chamfer_parameters_to_json, chamfer_result_from_json, chamfer_result_to_json,
    intersections_from_json, intersections_to_json,
};
use coordcalc_core::{
    CalculationInput, ChamferCalculator, ChamferParameters, CornerDirection,
    IntersectionCalculator, Point, ShapeInput,
};

#[test]
fn test_chamfer_history_entry_round_trip() {
    let params = ChamferParameters::new(
        12.345678901234,
        -0.1,
        33.333333333333336,
        2.0,
        CornerDirection::TopRight,
    )
    .unwrap();
    let result = ChamferCalculator::calculate_outer_chamfer_approach(&params);

    let stored_params = chamfer_parameters_to_json(&params).unwrap();
    let stored_result = chamfer_result_to_json(&result).unwrap();

    // bit-for-bit, nothing rounded on the way through
    assert_eq!(chamfer_parameters_from_json(&stored_params).unwrap(), params);
    assert_eq!(chamfer_result_from_json(&stored_result).unwrap(), result);
}

#[test]
fn test_intersection_history_entry_round_trip() {
    let input = CalculationInput::new(
        ShapeInput::LinePointAngle {
            point: Point::new(0.1, 0.2),
            angle_degrees: 17.5,
        },
        ShapeInput::Circle {
            center: Point::new(1.0 / 3.0, -2.0 / 3.0),
            radius: 4.0,
        },
    );
    let result = IntersectionCalculator::calculate_input(&input);
    assert_eq!(result.points().len(), 2);

    let stored_input = calculation_input_to_json(&input).unwrap();
    let stored_points = intersections_to_json(result.points()).unwrap();

    let restored_input = calculation_input_from_json(&stored_input).unwrap();
    assert_eq!(restored_input, input);
    assert_eq!(intersections_from_json(&stored_points), result.points());
    assert_eq!(IntersectionCalculator::calculate_input(&restored_input), result);
}

#[test]
fn test_chamfer_result_rejects_missing_fields() {
    assert!(chamfer_result_from_json(r#"{"approachX":1.0}"#).is_err());
}
