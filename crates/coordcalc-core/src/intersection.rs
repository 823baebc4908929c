//! Pairwise intersections of infinite lines and full circles
//!
//! Every algorithm is a total function over well-formed primitives: each
//! edge case resolves to one of the [`CalculationResult`] variants. All
//! degeneracy decisions use the shared [`EPSILON`].
//!
//! Point order inside a `Success` is fixed by the algorithm and carries no
//! geometric meaning (it is not a left/right or top/bottom ordering).

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::geometry::{Circle, Line, Point};
use crate::rounding;
use crate::shapes::{CalculationInput, Primitive, ShapeInput};
use crate::tolerance::EPSILON;

/// Multiplicity of an intersection point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntersectionKind {
    /// Transversal crossing
    #[serde(rename = "INTERSECTION")]
    Ordinary,
    /// Double root: the shapes touch at exactly one point
    #[serde(rename = "TANGENT")]
    Tangent,
}

impl fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary => write!(f, "INTERSECTION"),
            Self::Tangent => write!(f, "TANGENT"),
        }
    }
}

/// A single intersection point tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionResult {
    pub point: Point,
    pub kind: IntersectionKind,
}

impl IntersectionResult {
    pub fn ordinary(point: Point) -> Self {
        Self {
            point,
            kind: IntersectionKind::Ordinary,
        }
    }

    pub fn tangent(point: Point) -> Self {
        Self {
            point,
            kind: IntersectionKind::Tangent,
        }
    }
}

/// Outcome of one intersection calculation
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResult {
    /// One or two intersection points, never empty
    Success(Vec<IntersectionResult>),
    /// The shapes do not meet; a valid outcome, not a failure
    NoIntersection(String),
    /// The caller supplied input the engine cannot work with
    Error(String),
}

impl CalculationResult {
    fn no_intersection(reason: &str) -> Self {
        debug!(reason, "no intersection");
        Self::NoIntersection(reason.to_string())
    }

    fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        debug!(%message, "intersection calculation rejected");
        Self::Error(message)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Intersection points, empty unless `Success`
    pub fn points(&self) -> &[IntersectionResult] {
        match self {
            Self::Success(points) => points,
            Self::NoIntersection(_) | Self::Error(_) => &[],
        }
    }

    /// The point to preselect for the user: only when exactly one exists.
    pub fn auto_selected(&self) -> Option<&IntersectionResult> {
        match self.points() {
            [single] => Some(single),
            _ => None,
        }
    }

    /// Copy with every point rounded for display.
    pub fn rounded(&self, decimal_places: u32) -> Self {
        match self {
            Self::Success(points) => Self::Success(
                points
                    .iter()
                    .map(|r| IntersectionResult {
                        point: rounding::round_point(r.point, decimal_places),
                        kind: r.kind,
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// Intersection algorithms for every primitive pair
pub struct IntersectionCalculator;

impl IntersectionCalculator {
    /// Solve two implicit line equations with Cramer's rule.
    pub fn line_line(line1: &Line, line2: &Line) -> CalculationResult {
        let det = line1.a() * line2.b() - line2.a() * line1.b();

        if det.abs() < EPSILON {
            return CalculationResult::no_intersection("lines are parallel");
        }

        let x = (line1.b() * line2.c() - line2.b() * line1.c()) / det;
        let y = (line2.a() * line1.c() - line1.a() * line2.c()) / det;

        CalculationResult::Success(vec![IntersectionResult::ordinary(Point::new(x, y))])
    }

    /// Project the center onto the line and step half a chord both ways.
    pub fn line_circle(line: &Line, circle: &Circle) -> CalculationResult {
        let (a, b, c) = (line.a(), line.b(), line.c());
        let center = circle.center();
        let r = circle.radius();

        let norm_sq = a * a + b * b;
        let denom = norm_sq.sqrt();
        let residual = a * center.x + b * center.y + c;
        let distance = residual.abs() / denom;

        if distance > r + EPSILON {
            return CalculationResult::no_intersection("line does not reach the circle");
        }

        // foot of the perpendicular from the center
        let t = -residual / norm_sq;
        let nearest = Point::new(center.x + a * t, center.y + b * t);

        if (distance - r).abs() < EPSILON {
            return CalculationResult::Success(vec![IntersectionResult::tangent(nearest)]);
        }

        // distance can land on r + EPSILON without passing the tangency check
        let chord_sq = r * r - distance * distance;
        if chord_sq <= 0.0 {
            return CalculationResult::Success(vec![IntersectionResult::tangent(nearest)]);
        }

        let half_chord = chord_sq.sqrt();
        let dx = b / denom * half_chord;
        let dy = -a / denom * half_chord;

        CalculationResult::Success(vec![
            IntersectionResult::ordinary(Point::new(nearest.x + dx, nearest.y + dy)),
            IntersectionResult::ordinary(Point::new(nearest.x - dx, nearest.y - dy)),
        ])
    }

    /// Intersect along the radical line of the two circles.
    pub fn circle_circle(circle1: &Circle, circle2: &Circle) -> CalculationResult {
        let c1 = circle1.center();
        let c2 = circle2.center();
        let r1 = circle1.radius();
        let r2 = circle2.radius();

        let d = c1.distance_to(&c2);

        if d < EPSILON {
            return if (r1 - r2).abs() < EPSILON {
                CalculationResult::no_intersection("identical circles")
            } else {
                CalculationResult::no_intersection("concentric circles, no intersection")
            };
        }

        if d > r1 + r2 + EPSILON {
            return CalculationResult::no_intersection("circles are too far apart");
        }

        if d < (r1 - r2).abs() - EPSILON {
            return CalculationResult::no_intersection("one circle contains the other");
        }

        let is_tangent = (d - (r1 + r2)).abs() < EPSILON || (d - (r1 - r2).abs()).abs() < EPSILON;

        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let h_sq = r1 * r1 - a * a;

        let px = c1.x + a * (c2.x - c1.x) / d;
        let py = c1.y + a * (c2.y - c1.y) / d;

        // h_sq below EPSILON is treated as tangent even when the distance
        // checks above did not trigger
        if is_tangent || h_sq < EPSILON {
            return CalculationResult::Success(vec![IntersectionResult::tangent(Point::new(
                px, py,
            ))]);
        }

        let h = h_sq.sqrt();
        let dx = h * (c2.y - c1.y) / d;
        let dy = h * (c2.x - c1.x) / d;

        CalculationResult::Success(vec![
            IntersectionResult::ordinary(Point::new(px + dx, py - dy)),
            IntersectionResult::ordinary(Point::new(px - dx, py + dy)),
        ])
    }

    /// Pick the algorithm from the runtime kinds of two shape inputs.
    ///
    /// A missing shape or one that cannot be turned into a line or circle
    /// yields `Error`. Line/circle pairs are solved with the line first,
    /// whichever side it was supplied on.
    pub fn calculate(
        shape_a: Option<&ShapeInput>,
        shape_b: Option<&ShapeInput>,
    ) -> CalculationResult {
        let (Some(shape_a), Some(shape_b)) = (shape_a, shape_b) else {
            return CalculationResult::error("invalid input");
        };

        let primitive_a = match shape_a.to_primitive() {
            Ok(p) => p,
            Err(e) => return CalculationResult::error(format!("shape A: {}", e)),
        };
        let primitive_b = match shape_b.to_primitive() {
            Ok(p) => p,
            Err(e) => return CalculationResult::error(format!("shape B: {}", e)),
        };

        match (primitive_a, primitive_b) {
            (Primitive::Line(l1), Primitive::Line(l2)) => Self::line_line(&l1, &l2),
            (Primitive::Line(line), Primitive::Circle(circle))
            | (Primitive::Circle(circle), Primitive::Line(line)) => {
                Self::line_circle(&line, &circle)
            }
            (Primitive::Circle(c1), Primitive::Circle(c2)) => Self::circle_circle(&c1, &c2),
        }
    }

    /// Run [`IntersectionCalculator::calculate`] on a stored input pair.
    pub fn calculate_input(input: &CalculationInput) -> CalculationResult {
        Self::calculate(Some(&input.shape_a), Some(&input.shape_b))
    }
}
