//! Balls moving at constant velocity and bouncing off obstacles.

use log::{debug, trace, warn};

use super::{
    CollidableId, CollisionEdge, CollisionInfo, GameEnvironment, Line, Point, Velocity,
};

/// What a ball did during one simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BallStep {
    /// Moved by its velocity without touching anything.
    FreeMove,
    /// Was pushed out of the paddle's side.
    PaddleEscape { edge: CollisionEdge },
    /// Came to rest next to an obstacle and took the velocity it returned.
    ObstacleBounce(CollisionInfo),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    center: Point,
    radius: u32,
    velocity: Velocity,
    paddle: Option<CollidableId>,
}

impl Ball {
    pub fn new(center: Point, radius: u32) -> Self {
        Self {
            center,
            radius,
            velocity: Velocity::default(),
            paddle: None,
        }
    }

    pub fn with_velocity(self, velocity: Velocity) -> Self {
        Self { velocity, ..self }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn paddle(&self) -> Option<CollidableId> {
        self.paddle
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// The paddle is only used to eject the ball when the paddle moved onto it.
    pub fn set_paddle(&mut self, paddle: Option<CollidableId>) {
        self.paddle = paddle;
    }

    pub fn move_one_step(&mut self, environment: &mut GameEnvironment) -> BallStep {
        if let Some(edge) = self.escape_paddle(environment) {
            return BallStep::PaddleEscape { edge };
        }

        let movement = Line::new(self.center, self.velocity.apply_to_point(self.center));
        let Some(mut info) = environment.closest_collision(&movement) else {
            self.center = movement.end();
            trace!("ball moved freely to {}", self.center);
            return BallStep::FreeMove;
        };

        let mut resting_point = self.resting_point(&info, environment.config().nudge_threshold);
        // The nudged point may still sit behind another obstacle; correct once more against it.
        if let Some(closer) = environment.closest_collision(&Line::new(self.center, resting_point))
        {
            debug!(
                "ball resting point {resting_point} is behind {}, correcting",
                closer.object()
            );
            resting_point = self.resting_point(&closer, environment.config().nudge_threshold);
            info = closer;
        }
        self.center = resting_point;

        match environment.hit(info.object(), info.point(), self.velocity) {
            Ok(velocity) => self.velocity = velocity,
            Err(err) => warn!("ball kept its velocity: {err}"),
        }
        debug!(
            "ball hit {} at {} on {}, now at {} with velocity ({:.2}, {:.2})",
            info.object(),
            info.point(),
            info.edge().map_or_else(|| "no edge".to_string(), |edge| edge.to_string()),
            self.center,
            self.velocity.dx(),
            self.velocity.dy()
        );
        BallStep::ObstacleBounce(info)
    }

    /// Collision point moved off the struck edge, towards the side the ball comes from.
    fn resting_point(&self, info: &CollisionInfo, threshold: f64) -> Point {
        let point = info.point();
        if info.edge().is_some_and(CollisionEdge::is_horizontal) {
            let offset = if self.velocity.is_right() { -threshold } else { threshold };
            Point::new(point.x() + offset, point.y())
        } else {
            let offset = if self.velocity.is_bottom() { -threshold } else { threshold };
            Point::new(point.x(), point.y() + offset)
        }
    }

    /// Pushes the ball out of the paddle when it overlaps one of the paddle's sides. Returns the
    /// struck side if the ball was moved out.
    fn escape_paddle(&mut self, environment: &GameEnvironment) -> Option<CollisionEdge> {
        let paddle_id = self.paddle?;
        let paddle = match environment.get(paddle_id) {
            Ok(paddle) => paddle,
            Err(err) => {
                warn!("ignoring paddle of ball at {}: {err}", self.center);
                return None;
            }
        };

        let rectangle = paddle.collision_rectangle();
        let radius = f64::from(self.radius);
        if !rectangle.is_ball_inside(self.center, radius) {
            return None;
        }

        let config = environment.config();
        let diameter = Line::new(
            Point::new(self.center.x() - radius, self.center.y()),
            Point::new(self.center.x() + radius, self.center.y()),
        );
        let point = diameter.closest_intersection_to_start_of_line(rectangle, config.tolerance)?;

        let (edge, angle) = match paddle.collision_edge(point, config.tolerance) {
            Some(CollisionEdge::Right) => (CollisionEdge::Right, config.escape.angle),
            Some(CollisionEdge::Left) => (CollisionEdge::Left, -config.escape.angle),
            edge => {
                trace!("paddle overlap at {point} on {edge:?} is not a side, moving on");
                self.center = self.velocity.apply_to_point(self.center);
                return None;
            }
        };

        // The escape move is not checked against other obstacles and may end inside one.
        let escaping = self.velocity.accelerate(angle, config.escape.speed);
        self.center = escaping.apply_to_point(self.center);
        self.velocity = escaping.accelerate(angle, -config.escape.speed);
        debug!("ball escaped paddle {paddle_id} through {edge} to {}", self.center);
        Some(edge)
    }
}
