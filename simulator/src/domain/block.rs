//! Rectangular obstacles with pluggable bounce behavior.

use std::fmt;

use super::{Collidable, Point, Rectangle, Tolerance, Velocity};

/// Decides the velocity a body leaves an obstacle with.
pub trait HitStrategy: fmt::Debug {
    fn bounce(
        &self,
        rectangle: &Rectangle,
        point: Point,
        velocity: Velocity,
        tolerance: Tolerance,
    ) -> Velocity;
}

/// Mirrors the velocity along the axis of the struck edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reflect;

impl HitStrategy for Reflect {
    fn bounce(
        &self,
        rectangle: &Rectangle,
        point: Point,
        velocity: Velocity,
        tolerance: Tolerance,
    ) -> Velocity {
        velocity.collide(point, rectangle, tolerance)
    }
}

#[derive(Debug)]
pub struct Block {
    rectangle: Rectangle,
    strategy: Box<dyn HitStrategy>,
    hits: u32,
}

impl Block {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            rectangle: Rectangle::new(origin, width, height),
            strategy: Box::new(Reflect),
            hits: 0,
        }
    }

    pub fn with_strategy(self, strategy: impl HitStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            ..self
        }
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    /// Number of times a body struck this block.
    pub fn hits(&self) -> u32 {
        self.hits
    }
}

impl From<Rectangle> for Block {
    fn from(rectangle: Rectangle) -> Self {
        Self {
            rectangle,
            strategy: Box::new(Reflect),
            hits: 0,
        }
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    fn hit(&mut self, point: Point, velocity: Velocity, tolerance: Tolerance) -> Velocity {
        self.hits = self.hits.saturating_add(1);
        self.strategy
            .bounce(&self.rectangle, point, velocity, tolerance)
    }

    fn set_origin(&mut self, origin: Point) {
        self.rectangle.set_origin(origin);
    }
}
