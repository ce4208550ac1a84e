//! Frame-stepped simulation of balls in an environment with obstacles.
//!
//! Every tick advances each ball exactly once, in insertion order, against the same obstacle set.
//! Obstacles struck during a tick are reported as `HitEvent`s so the caller can react, e.g. by
//! removing a brick, before the next tick starts.

use std::fmt;

use log::trace;

use crate::domain::{Ball, BallStep, CollidableId, CollisionEdge, GameEnvironment, Point};

/// Handle of a ball registered in a simulation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct BallId(usize);

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ball #{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitEvent {
    pub ball: BallId,
    pub collidable: CollidableId,
    pub point: Point,
    pub edge: Option<CollisionEdge>,
}

#[derive(Debug, Default)]
pub struct Simulation {
    environment: GameEnvironment,
    balls: Vec<(BallId, Ball)>,
    next_ball_id: usize,
    ticks: u64,
}

impl Simulation {
    pub fn new(environment: GameEnvironment) -> Self {
        Self {
            environment,
            balls: Vec::new(),
            next_ball_id: 0,
            ticks: 0,
        }
    }

    pub fn environment(&self) -> &GameEnvironment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut GameEnvironment {
        &mut self.environment
    }

    pub fn balls(&self) -> impl Iterator<Item = (BallId, &Ball)> + '_ {
        self.balls.iter().map(|(id, ball)| (*id, ball))
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls
            .iter()
            .find_map(|(candidate, ball)| (*candidate == id).then_some(ball))
    }

    pub fn add_ball(&mut self, ball: Ball) -> BallId {
        let id = BallId(self.next_ball_id);
        self.next_ball_id += 1;
        self.balls.push((id, ball));
        id
    }

    pub fn remove_ball(&mut self, id: BallId) -> Option<Ball> {
        let index = self.balls.iter().position(|(candidate, _)| *candidate == id)?;
        Some(self.balls.remove(index).1)
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> Vec<HitEvent> {
        let mut events = Vec::new();
        for (id, ball) in &mut self.balls {
            if let BallStep::ObstacleBounce(info) = ball.move_one_step(&mut self.environment) {
                events.push(HitEvent {
                    ball: *id,
                    collidable: info.object(),
                    point: info.point(),
                    edge: info.edge(),
                });
            }
        }
        self.ticks += 1;
        trace!("tick {} produced {} hits", self.ticks, events.len());
        events
    }

    /// Runs `ticks` ticks and returns all hits in the order they happened.
    pub fn run(&mut self, ticks: u64) -> Vec<HitEvent> {
        (0..ticks).flat_map(|_| self.tick()).collect()
    }
}
