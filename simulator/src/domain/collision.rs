//! Collision contracts between moving bodies and obstacles.

use std::{fmt, slice::Iter};

use super::{Point, Rectangle, Tolerance, Velocity};

/// Obstacle that bodies bounce off.
pub trait Collidable: fmt::Debug {
    fn collision_rectangle(&self) -> &Rectangle;

    fn collision_edge(&self, point: Point, tolerance: Tolerance) -> Option<CollisionEdge> {
        self.collision_rectangle().collision_edge(point, tolerance)
    }

    /// Called after a body struck this obstacle at `point`; returns the body's new velocity.
    fn hit(&mut self, point: Point, velocity: Velocity, tolerance: Tolerance) -> Velocity {
        velocity.collide(point, &*self, tolerance)
    }

    fn set_origin(&mut self, origin: Point);
}

/// Side of a rectangle that was struck.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum CollisionEdge {
    Top,
    Right,
    Bottom,
    Left,
    Corner,
}

impl CollisionEdge {
    pub fn iter() -> Iter<'static, CollisionEdge> {
        static EDGES: [CollisionEdge; 5] = [
            CollisionEdge::Top,
            CollisionEdge::Right,
            CollisionEdge::Bottom,
            CollisionEdge::Left,
            CollisionEdge::Corner,
        ];
        EDGES.iter()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index).copied()
    }

    /// Left and right edges reverse horizontal motion.
    pub fn is_horizontal(self) -> bool {
        matches!(self, CollisionEdge::Left | CollisionEdge::Right)
    }
}

impl fmt::Display for CollisionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionEdge::Top => "TOP",
            CollisionEdge::Right => "RIGHT",
            CollisionEdge::Bottom => "BOTTOM",
            CollisionEdge::Left => "LEFT",
            CollisionEdge::Corner => "CORNER",
        })
    }
}

/// Handle of a collidable registered in an environment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct CollidableId(usize);

impl CollidableId {
    pub(super) fn new(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for CollidableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionInfo {
    point: Point,
    object: CollidableId,
    edge: Option<CollisionEdge>,
}

impl CollisionInfo {
    pub(super) fn new(point: Point, object: CollidableId, edge: Option<CollisionEdge>) -> Self {
        Self {
            point,
            object,
            edge,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn object(&self) -> CollidableId {
        self.object
    }

    pub fn edge(&self) -> Option<CollisionEdge> {
        self.edge
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Some(CollisionEdge::Top))]
    #[case(1, Some(CollisionEdge::Right))]
    #[case(2, Some(CollisionEdge::Bottom))]
    #[case(3, Some(CollisionEdge::Left))]
    #[case(4, Some(CollisionEdge::Corner))]
    #[case(5, None)]
    fn test_collision_edge_from_index(#[case] index: usize, #[case] expected: Option<CollisionEdge>) {
        assert_eq!(CollisionEdge::from_index(index), expected);
    }

    #[test]
    fn test_collision_edge_is_horizontal() {
        let horizontal = CollisionEdge::iter()
            .filter(|edge| edge.is_horizontal())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(horizontal, vec![CollisionEdge::Right, CollisionEdge::Left]);
    }

    #[test]
    fn test_collision_edge_display() {
        let names = CollisionEdge::iter()
            .map(|edge| edge.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        insta::assert_snapshot!(names, @"TOP RIGHT BOTTOM LEFT CORNER");
    }

    #[test]
    fn test_rectangle_hit_reflects() {
        let mut rectangle = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let velocity = rectangle.hit(Point::new(0.0, 5.0), Velocity::new(2.0, 1.0), Tolerance::DEFAULT);
        assert_eq!(velocity, Velocity::new(-2.0, 1.0));
    }
}
