//! Line segments and their intersections.

use std::fmt;

use nalgebra::{Matrix2, Vector2};

use super::{Point, Rectangle, Tolerance};

/// Turn direction of the path p -> q -> r.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn of(p: Point, q: Point, r: Point) -> Self {
        let value = (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y());
        if value == 0.0 {
            Orientation::Collinear
        } else if value > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2.0,
            (self.start.y() + self.end.y()) / 2.0,
        )
    }

    /// Lines are equal if their endpoint sets match, regardless of direction.
    pub fn equals_within(&self, other: &Line, tolerance: Tolerance) -> bool {
        (self.start.equals_within(other.start, tolerance)
            && self.end.equals_within(other.end, tolerance))
            || (self.start.equals_within(other.end, tolerance)
                && self.end.equals_within(other.start, tolerance))
    }

    pub fn is_intersecting(&self, other: &Line, tolerance: Tolerance) -> bool {
        let (a, b, c, d) = (self.start, self.end, other.start, other.end);

        if [c, d]
            .iter()
            .any(|p| a.equals_within(*p, tolerance) || b.equals_within(*p, tolerance))
        {
            return true;
        }

        let o1 = Orientation::of(a, c, d);
        let o2 = Orientation::of(b, c, d);
        let o3 = Orientation::of(a, b, c);
        let o4 = Orientation::of(a, b, d);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        // A collinear triple only counts when its odd point lies within the other segment.
        (o1 == Orientation::Collinear && in_bounds(c, a, d, tolerance))
            || (o2 == Orientation::Collinear && in_bounds(c, b, d, tolerance))
            || (o3 == Orientation::Collinear && in_bounds(a, c, b, tolerance))
            || (o4 == Orientation::Collinear && in_bounds(a, d, b, tolerance))
    }

    pub fn is_intersecting_both(&self, first: &Line, second: &Line, tolerance: Tolerance) -> bool {
        self.is_intersecting(first, tolerance) && self.is_intersecting(second, tolerance)
    }

    /// The single point where both segments meet. Collinear segments overlapping along a range
    /// and near-parallel segments have no such point.
    pub fn intersection_with(&self, other: &Line, tolerance: Tolerance) -> Option<Point> {
        if !self.is_intersecting(other, tolerance) {
            return None;
        }

        let (a, b, c, d) = (other.start, other.end, self.start, self.end);

        if Orientation::of(a, b, c) == Orientation::Collinear
            && Orientation::of(a, b, d) == Orientation::Collinear
            && (in_bounds(a, c, b, tolerance)
                || in_bounds(a, d, b, tolerance)
                || in_bounds(c, a, d, tolerance)
                || in_bounds(c, b, d, tolerance))
        {
            return self.shared_endpoint(other, tolerance);
        }

        // Both lines in the form dy * x - dx * y = offset.
        let (dx1, dy1) = (b.x() - a.x(), b.y() - a.y());
        let (dx2, dy2) = (d.x() - c.x(), d.y() - c.y());
        let coefficients = Matrix2::new(dy1, -dx1, dy2, -dx2);
        if tolerance.is_negligible(coefficients.determinant()) {
            return None;
        }
        let offsets = Vector2::new(dy1 * a.x() - dx1 * a.y(), dy2 * c.x() - dx2 * c.y());

        coefficients
            .try_inverse()
            .map(|inverse| inverse * offsets)
            .map(|solution| Point::new(solution.x, solution.y))
    }

    /// Endpoint shared by two collinear segments that touch in exactly that point.
    fn shared_endpoint(&self, other: &Line, tolerance: Tolerance) -> Option<Point> {
        for (shared, other_far) in [(other.start, other.end), (other.end, other.start)] {
            for (own, own_far) in [(self.start, self.end), (self.end, self.start)] {
                if shared.equals_within(own, tolerance)
                    && !in_bounds(other.start, own_far, other.end, tolerance)
                    && !in_bounds(self.start, other_far, self.end, tolerance)
                {
                    return Some(shared);
                }
            }
        }
        None
    }

    pub fn is_point_on_line(&self, point: Point, tolerance: Tolerance) -> bool {
        if !in_bounds(self.start, point, self.end, tolerance) {
            return false;
        }
        let length = self.length();
        if tolerance.is_negligible(length) {
            return self.start.equals_within(point, tolerance);
        }
        let cross = (self.end.x() - self.start.x()) * (point.y() - self.start.y())
            - (self.end.y() - self.start.y()) * (point.x() - self.start.x());
        tolerance.is_negligible(cross / length)
    }

    /// Intersection with the rectangle's boundary nearest to this line's start. Ties keep the
    /// first point in Top, Right, Bottom, Left edge order.
    pub fn closest_intersection_to_start_of_line(
        &self,
        rectangle: &Rectangle,
        tolerance: Tolerance,
    ) -> Option<Point> {
        rectangle
            .intersection_points(self, tolerance)
            .into_iter()
            .min_by(|a, b| self.start.distance(*a).total_cmp(&self.start.distance(*b)))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.equals_within(other, Tolerance::DEFAULT)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Whether `q` lies within the padded bounding box spanned by `p` and `r`.
fn in_bounds(p: Point, q: Point, r: Point, tolerance: Tolerance) -> bool {
    let epsilon = tolerance.value();
    q.x() <= p.x().max(r.x()) + epsilon
        && q.x() >= p.x().min(r.x()) - epsilon
        && q.y() <= p.y().max(r.y()) + epsilon
        && q.y() >= p.y().min(r.y()) - epsilon
}
