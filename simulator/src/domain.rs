//! The domain module encapsulates the collision engine. It defines the geometric primitives, the
//! obstacles registered in a `GameEnvironment` and the `Ball` moving among them.
//!
//! Nothing in here knows about rendering or timing, a caller drives the engine step by step.

mod ball;
mod basis;
mod block;
mod collision;
mod config;
mod environment;
mod line;
mod rectangle;

pub use ball::{Ball, BallStep};
pub use basis::{Angle, Point, Tolerance, Velocity};
pub use block::{Block, HitStrategy, Reflect};
pub use collision::{Collidable, CollidableId, CollisionEdge, CollisionInfo};
pub use config::{ConfigError, EscapeConfig, PhysicsConfig, ScanPolicy};
pub use environment::{EnvironmentError, GameEnvironment};
pub use line::{Line, Orientation};
pub use rectangle::Rectangle;
