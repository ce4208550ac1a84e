//! Axis-aligned rectangles.

use super::{Collidable, CollisionEdge, Line, Point, Tolerance};

/// Axis-aligned box anchored at its top-left corner.
///
/// The boundary is kept as four segments in Top, Right, Bottom, Left order and is recomputed
/// whenever the origin changes. Malformed dimensions produce an empty rectangle at (0, 0)
/// without any boundary, so nothing can collide with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    origin: Point,
    width: f64,
    height: f64,
    edges: Option<[Line; 4]>,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        let valid_dimensions = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
        if !valid_dimensions || !origin.is_finite() {
            return Self::empty();
        }

        let mut rectangle = Self {
            origin,
            width,
            height,
            edges: None,
        };
        rectangle.set_origin(origin);
        rectangle
    }

    pub fn empty() -> Self {
        Self {
            origin: Point::default(),
            width: 0.0,
            height: 0.0,
            edges: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_none()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.origin.x()
    }

    pub fn right(&self) -> f64 {
        self.origin.x() + self.width
    }

    pub fn top(&self) -> f64 {
        self.origin.y()
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y() + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x() + self.width / 2.0,
            self.origin.y() + self.height / 2.0,
        )
    }

    /// Moves the rectangle. Empty rectangles stay where they are.
    pub fn set_origin(&mut self, origin: Point) {
        if self.width <= 0.0 || self.height <= 0.0 || !origin.is_finite() {
            return;
        }

        let top_right = Point::new(origin.x() + self.width, origin.y());
        let bottom_right = Point::new(origin.x() + self.width, origin.y() + self.height);
        let bottom_left = Point::new(origin.x(), origin.y() + self.height);

        self.origin = origin;
        self.edges = Some([
            Line::new(origin, top_right),
            Line::new(top_right, bottom_right),
            Line::new(bottom_right, bottom_left),
            Line::new(bottom_left, origin),
        ]);
    }

    pub fn edges(&self) -> &[Line] {
        self.edges.as_ref().map_or(&[], |edges| edges.as_slice())
    }

    /// The edge `point` lies on, or a corner if it lies on two of them.
    pub fn collision_edge(&self, point: Point, tolerance: Tolerance) -> Option<CollisionEdge> {
        let mut edge = None;
        for (index, line) in self.edges().iter().enumerate() {
            if line.is_point_on_line(point, tolerance) {
                if edge.is_some() {
                    return Some(CollisionEdge::Corner);
                }
                edge = CollisionEdge::from_index(index);
            }
        }
        edge
    }

    /// Distinct points where `line` crosses the boundary, in no particular order.
    pub fn intersection_points(&self, line: &Line, tolerance: Tolerance) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::with_capacity(4);
        for edge in self.edges() {
            if let Some(point) = line.intersection_with(edge, tolerance) {
                if !points.iter().any(|p| p.equals_within(point, tolerance)) {
                    points.push(point);
                }
            }
        }
        points
    }

    /// Coarse overlap test between the bounds and the square around a circle.
    pub fn is_ball_inside(&self, center: Point, radius: f64) -> bool {
        center.x() + radius > self.left()
            && center.x() - radius < self.right()
            && center.y() + radius > self.top()
            && center.y() - radius < self.bottom()
    }

    /// Whether `point` lies strictly inside the bounds.
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x() > self.left()
            && point.x() < self.right()
            && point.y() > self.top()
            && point.y() < self.bottom()
    }
}

impl Collidable for Rectangle {
    fn collision_rectangle(&self) -> &Rectangle {
        self
    }

    fn set_origin(&mut self, origin: Point) {
        Rectangle::set_origin(self, origin);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::line;

    const EPSILON: f64 = 1e-9;
    const TOLERANCE: Tolerance = Tolerance::DEFAULT;

    fn rectangle() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), 50.0, 30.0)
    }

    #[test]
    fn test_rectangle_edges() {
        for (edge, expected) in std::iter::zip(
            rectangle().edges(),
            [
                line(100.0, 100.0, 150.0, 100.0),
                line(150.0, 100.0, 150.0, 130.0),
                line(150.0, 130.0, 100.0, 130.0),
                line(100.0, 130.0, 100.0, 100.0),
            ],
        ) {
            assert_abs_diff_eq!(*edge, expected);
        }
    }

    #[test]
    fn test_rectangle_set_origin_recomputes_edges() {
        let mut rectangle = rectangle();
        rectangle.set_origin(Point::new(0.0, 10.0));
        assert_eq!(rectangle.edges()[1], line(50.0, 10.0, 50.0, 40.0));
        assert_abs_diff_eq!(rectangle.center(), Point::new(25.0, 25.0));
        assert_eq!(
            rectangle.collision_edge(Point::new(125.0, 100.0), TOLERANCE),
            None
        );
    }

    #[rstest]
    #[case::zero_width(Point::new(10.0, 10.0), 0.0, 5.0)]
    #[case::negative_height(Point::new(10.0, 10.0), 5.0, -1.0)]
    #[case::nan_width(Point::new(10.0, 10.0), f64::NAN, 5.0)]
    #[case::infinite_origin(Point::new(f64::INFINITY, 10.0), 5.0, 5.0)]
    fn test_rectangle_malformed(#[case] origin: Point, #[case] width: f64, #[case] height: f64) {
        let mut rectangle = Rectangle::new(origin, width, height);
        assert!(rectangle.is_empty());
        assert_eq!(rectangle, Rectangle::empty());
        assert!(rectangle.edges().is_empty());
        assert!(rectangle
            .intersection_points(&line(-10.0, -10.0, 10.0, 10.0), TOLERANCE)
            .is_empty());

        rectangle.set_origin(Point::new(3.0, 3.0));
        assert_abs_diff_eq!(rectangle.origin(), Point::default());
        assert!(rectangle.is_empty());
    }

    #[rstest]
    #[case::top(Point::new(125.0, 100.0), Some(CollisionEdge::Top))]
    #[case::right(Point::new(150.0, 115.0), Some(CollisionEdge::Right))]
    #[case::bottom(Point::new(125.0, 130.0), Some(CollisionEdge::Bottom))]
    #[case::left(Point::new(100.0, 115.0), Some(CollisionEdge::Left))]
    #[case::top_left_corner(Point::new(100.0, 100.0), Some(CollisionEdge::Corner))]
    #[case::bottom_right_corner(Point::new(150.0, 130.0), Some(CollisionEdge::Corner))]
    #[case::interior(Point::new(125.0, 115.0), None)]
    #[case::exterior(Point::new(0.0, 0.0), None)]
    fn test_rectangle_collision_edge(#[case] point: Point, #[case] expected: Option<CollisionEdge>) {
        assert_eq!(rectangle().collision_edge(point, TOLERANCE), expected);
    }

    #[rstest]
    #[case::through(line(90.0, 115.0, 160.0, 115.0), 2)]
    #[case::into(line(90.0, 115.0, 120.0, 115.0), 1)]
    #[case::through_corner(line(90.0, 90.0, 110.0, 110.0), 1)]
    #[case::diagonal(line(90.0, 90.0, 160.0, 160.0), 2)]
    #[case::along_edge(line(90.0, 100.0, 160.0, 100.0), 2)]
    #[case::inside(line(110.0, 110.0, 120.0, 120.0), 0)]
    #[case::outside(line(0.0, 0.0, 10.0, 10.0), 0)]
    fn test_rectangle_intersection_points(#[case] line: Line, #[case] count: usize) {
        assert_eq!(rectangle().intersection_points(&line, TOLERANCE).len(), count);
    }

    #[test]
    fn test_rectangle_intersection_points_are_on_boundary() {
        let rectangle = rectangle();
        let mut points = rectangle.intersection_points(&line(90.0, 115.0, 160.0, 115.0), TOLERANCE);
        points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        assert_abs_diff_eq!(points[0], Point::new(100.0, 115.0), epsilon = EPSILON);
        assert_abs_diff_eq!(points[1], Point::new(150.0, 115.0), epsilon = EPSILON);
    }

    #[rstest]
    #[case::overlapping_left(Point::new(96.0, 115.0), 5.0, true)]
    #[case::touching_left(Point::new(95.0, 115.0), 5.0, false)]
    #[case::inside(Point::new(125.0, 115.0), 1.0, true)]
    #[case::above(Point::new(125.0, 90.0), 5.0, false)]
    #[case::overlapping_bottom(Point::new(125.0, 134.0), 5.0, true)]
    #[case::diagonal_outside_circle(Point::new(97.0, 97.0), 5.0, true)]
    fn test_rectangle_is_ball_inside(
        #[case] center: Point,
        #[case] radius: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(rectangle().is_ball_inside(center, radius), expected);
    }

    #[rstest]
    #[case::interior(Point::new(125.0, 115.0), true)]
    #[case::on_edge(Point::new(100.0, 115.0), false)]
    #[case::outside(Point::new(99.0, 115.0), false)]
    fn test_rectangle_contains(#[case] point: Point, #[case] expected: bool) {
        assert_eq!(rectangle().contains(point), expected);
    }
}
