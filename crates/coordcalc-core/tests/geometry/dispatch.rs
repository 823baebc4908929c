use coordcalc_core::{
    CalculationInput, CalculationResult, IntersectionCalculator, IntersectionKind, Point,
    ShapeInput,
};

fn horizontal_line(y: f64) -> ShapeInput {
    ShapeInput::LineTwoPoints {
        p1: Point::new(-10.0, y),
        p2: Point::new(10.0, y),
    }
}

fn origin_circle(radius: f64) -> ShapeInput {
    ShapeInput::Circle {
        center: Point::new(0.0, 0.0),
        radius,
    }
}

#[test]
fn test_missing_shape_is_error() {
    let line = horizontal_line(0.0);
    assert_eq!(
        IntersectionCalculator::calculate(None, Some(&line)),
        CalculationResult::Error("invalid input".to_string())
    );
    assert!(matches!(
        IntersectionCalculator::calculate(Some(&line), None),
        CalculationResult::Error(_)
    ));
}

#[test]
fn test_degenerate_line_is_error() {
    let p = Point::new(3.0, 3.0);
    let degenerate = ShapeInput::LineTwoPoints { p1: p, p2: p };
    let result = IntersectionCalculator::calculate(Some(&degenerate), Some(&origin_circle(5.0)));
    match result {
        CalculationResult::Error(message) => assert!(message.starts_with("shape A")),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn test_invalid_radius_is_error() {
    let result = IntersectionCalculator::calculate(
        Some(&horizontal_line(0.0)),
        Some(&origin_circle(-1.0)),
    );
    match result {
        CalculationResult::Error(message) => assert!(message.starts_with("shape B")),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn test_line_and_line() {
    let vertical = ShapeInput::LinePointAngle {
        point: Point::new(3.0, 0.0),
        angle_degrees: 90.0,
    };
    let result = IntersectionCalculator::calculate(Some(&horizontal_line(5.0)), Some(&vertical));
    let single = result.auto_selected().expect("one point");
    assert!((single.point.x - 3.0).abs() < 1e-9);
    assert!((single.point.y - 5.0).abs() < 1e-9);
}

#[test]
fn test_circle_then_line_matches_line_then_circle() {
    let line = horizontal_line(1.0);
    let circle = origin_circle(5.0);

    let forward = IntersectionCalculator::calculate(Some(&line), Some(&circle));
    let reverse = IntersectionCalculator::calculate(Some(&circle), Some(&line));
    assert!(forward.is_success());
    assert_eq!(forward, reverse);
}

#[test]
fn test_circle_and_circle_tangent_auto_selects() {
    let other = ShapeInput::Circle {
        center: Point::new(10.0, 0.0),
        radius: 5.0,
    };
    let result = IntersectionCalculator::calculate(Some(&origin_circle(5.0)), Some(&other));
    let selected = result.auto_selected().expect("tangent point");
    assert_eq!(selected.kind, IntersectionKind::Tangent);
}

#[test]
fn test_calculate_input_replays_pair() {
    let input = CalculationInput::new(horizontal_line(0.0), origin_circle(5.0));
    let result = IntersectionCalculator::calculate_input(&input);
    assert_eq!(result.points().len(), 2);
    assert!(result.auto_selected().is_none());
}
