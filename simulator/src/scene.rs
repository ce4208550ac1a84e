//! The standard breakout arena: borders, a death strip below the paddle, rows of bricks and a
//! flock of balls launched upwards.

use std::collections::BTreeSet;

use log::{debug, info, warn};
use rand::{
    distr::{Distribution, Uniform},
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        Angle, Ball, Block, CollidableId, ConfigError, GameEnvironment, PhysicsConfig, Point,
        Velocity,
    },
    simulator::{HitEvent, Simulation},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaLayout {
    pub width: f64,
    pub height: f64,
    pub border: f64,
    /// Gap between the bottom of the paddle and the death strip.
    pub death_margin: f64,
    pub brick_width: f64,
    pub brick_height: f64,
    pub brick_rows: usize,
    /// Bricks in the first row; every following row has one less.
    pub initial_columns: usize,
    /// Distance between the top border and the first brick row.
    pub brick_top_offset: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub ball_count: usize,
    pub ball_radius: u32,
    pub ball_speed: f64,
    /// Launch headings are drawn from `-launch_spread..=launch_spread` degrees around "up".
    pub launch_spread: f64,
    pub seed: u64,
    pub ticks: u64,
    pub physics: PhysicsConfig,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            border: 30.0,
            death_margin: 5.0,
            brick_width: 50.0,
            brick_height: 20.0,
            brick_rows: 6,
            initial_columns: 12,
            brick_top_offset: 100.0,
            paddle_width: 200.0,
            paddle_height: 30.0,
            ball_count: 35,
            ball_radius: 5,
            ball_speed: 6.0,
            launch_spread: 30.0,
            seed: 19878367467712,
            ticks: 3600,
            physics: PhysicsConfig::default(),
        }
    }
}

/// What happened to the arena during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub hits: Vec<HitEvent>,
    pub bricks_removed: usize,
    pub balls_lost: usize,
}

#[derive(Debug)]
pub struct Arena {
    simulation: Simulation,
    borders: Vec<CollidableId>,
    death_strip: CollidableId,
    paddle: CollidableId,
    bricks: BTreeSet<CollidableId>,
}

impl Arena {
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn borders(&self) -> &[CollidableId] {
        &self.borders
    }

    pub fn death_strip(&self) -> CollidableId {
        self.death_strip
    }

    pub fn paddle(&self) -> CollidableId {
        self.paddle
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks.len()
    }

    pub fn remaining_balls(&self) -> usize {
        self.simulation.balls().count()
    }

    pub fn is_over(&self) -> bool {
        self.bricks.is_empty() || self.remaining_balls() == 0
    }

    /// Advances the simulation once, then removes struck bricks and balls that reached the death
    /// strip.
    pub fn tick(&mut self) -> TickOutcome {
        let hits = self.simulation.tick();
        let mut outcome = TickOutcome::default();

        for hit in &hits {
            if hit.collidable == self.death_strip {
                if self.simulation.remove_ball(hit.ball).is_some() {
                    debug!("{} fell into the death strip at {}", hit.ball, hit.point);
                    outcome.balls_lost += 1;
                }
            } else if self.bricks.remove(&hit.collidable) {
                match self.simulation.environment_mut().remove_collidable(hit.collidable) {
                    Ok(_) => outcome.bricks_removed += 1,
                    Err(err) => warn!("brick vanished before removal: {err}"),
                }
            }
        }

        outcome.hits = hits;
        outcome
    }
}

pub fn build_arena(layout: &ArenaLayout) -> Result<Arena, ConfigError> {
    layout.physics.validate()?;
    let launch = Uniform::try_from(-layout.launch_spread..=layout.launch_spread)
        .map_err(|err| ConfigError::InvalidLaunchRange(err.to_string()))?;

    let ArenaLayout {
        width,
        height,
        border,
        ..
    } = *layout;
    let mut environment = GameEnvironment::new(layout.physics);

    let borders = vec![
        environment.add_collidable(Block::new(Point::new(0.0, 0.0), width, border)),
        environment.add_collidable(Block::new(Point::new(0.0, border), border, height - border)),
        environment.add_collidable(Block::new(
            Point::new(width - border, border),
            border,
            height - border,
        )),
    ];
    let death_strip = environment.add_collidable(Block::new(
        Point::new(border, height - border + layout.death_margin),
        width - 2.0 * border,
        border - layout.death_margin,
    ));

    let mut bricks = BTreeSet::new();
    for row in 0..layout.brick_rows {
        let columns = layout.initial_columns.saturating_sub(row);
        let y = border + layout.brick_top_offset + row as f64 * layout.brick_height;
        for column in 0..columns {
            let x = width - border - (column + 1) as f64 * layout.brick_width;
            bricks.insert(environment.add_collidable(Block::new(
                Point::new(x, y),
                layout.brick_width,
                layout.brick_height,
            )));
        }
    }

    let paddle = environment.add_collidable(Block::new(
        Point::new(
            width - border - layout.paddle_width,
            height - border - layout.paddle_height,
        ),
        layout.paddle_width,
        layout.paddle_height,
    ));

    let mut simulation = Simulation::new(environment);
    let mut rng = ChaCha8Rng::seed_from_u64(layout.seed);
    for index in 0..layout.ball_count {
        let center = Point::new(width - 90.0 - 15.0 * index as f64, height - 100.0);
        let heading = Angle::from_deg(launch.sample(&mut rng));
        let mut ball = Ball::new(center, layout.ball_radius)
            .with_velocity(Velocity::from_angle_and_speed(heading, layout.ball_speed));
        ball.set_paddle(Some(paddle));
        simulation.add_ball(ball);
    }

    info!(
        "built arena {width}x{height} with {} bricks and {} balls",
        bricks.len(),
        layout.ball_count
    );
    Ok(Arena {
        simulation,
        borders,
        death_strip,
        paddle,
        bricks,
    })
}
