//! Basic building blocks.

use std::{
    f64::consts::PI,
    fmt,
    ops::{Add, Neg},
};

use serde::{Deserialize, Serialize};

use super::{Collidable, CollisionEdge};

/// Threshold below which two coordinates are considered equal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tolerance(f64);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(1e-5);

    pub const fn new(epsilon: f64) -> Self {
        Self(epsilon)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_negligible(self, value: f64) -> bool {
        value.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A 2D coordinate. The y-axis grows downwards, as on a screen.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn equals_within(&self, other: Self, tolerance: Tolerance) -> bool {
        tolerance.is_negligible(self.x - other.x) && tolerance.is_negligible(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equals_within(*other, Tolerance::DEFAULT)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) + 360.0) % 360.0
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// Displacement applied to a body on every simulation step.
///
/// Velocities are values: reflecting or accelerating returns a new velocity and the owner
/// replaces its stored one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Headings are measured clockwise from "up": 0 moves towards negative y, 90 towards
    /// positive x.
    pub fn from_angle_and_speed(angle: Angle, speed: f64) -> Self {
        let radians: f64 = (angle + Angle::from_deg(-90.0)).into();
        Self {
            dx: speed * radians.cos(),
            dy: speed * radians.sin(),
        }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn speed(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    pub fn is_right(&self) -> bool {
        self.dx > 0.0
    }

    pub fn is_bottom(&self) -> bool {
        self.dy > 0.0
    }

    pub fn apply_to_point(&self, point: Point) -> Point {
        Point::new(point.x() + self.dx, point.y() + self.dy)
    }

    /// Heads in `angle` with the current speed changed by `delta`.
    pub fn accelerate(&self, angle: Angle, delta: f64) -> Self {
        Self::from_angle_and_speed(angle, self.speed() + delta)
    }

    pub fn reflect(&self, edge: Option<CollisionEdge>) -> Self {
        match edge {
            Some(CollisionEdge::Corner) => Self::new(-self.dx, -self.dy),
            Some(CollisionEdge::Left | CollisionEdge::Right) => Self::new(-self.dx, self.dy),
            Some(CollisionEdge::Top | CollisionEdge::Bottom) => Self::new(self.dx, -self.dy),
            None => *self,
        }
    }

    /// Velocity after striking `struck` at `point`. A stationary body never bounces.
    pub fn collide<C: Collidable + ?Sized>(
        &self,
        point: Point,
        struck: &C,
        tolerance: Tolerance,
    ) -> Self {
        if self.is_zero() {
            return *self;
        }
        self.reflect(struck.collision_edge(point, tolerance))
    }
}
