//! Environment with obstacles.

use log::warn;
use thiserror::Error;

use super::{
    Collidable, CollidableId, CollisionInfo, Line, PhysicsConfig, Point, ScanPolicy, Velocity,
};

/// The obstacles bodies may collide with, scanned once per movement.
#[derive(Debug, Default)]
pub struct GameEnvironment {
    collidables: Vec<(CollidableId, Box<dyn Collidable>)>,
    next_id: usize,
    config: PhysicsConfig,
}

impl GameEnvironment {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            collidables: Vec::new(),
            next_id: 0,
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = CollidableId> + '_ {
        self.collidables.iter().map(|(id, _)| *id)
    }

    pub fn add_collidable(&mut self, collidable: impl Collidable + 'static) -> CollidableId {
        let id = CollidableId::new(self.next_id);
        self.next_id += 1;
        self.collidables.push((id, Box::new(collidable)));
        id
    }

    pub fn remove_collidable(
        &mut self,
        id: CollidableId,
    ) -> Result<Box<dyn Collidable>, EnvironmentError> {
        let index = self.index_of(id)?;
        Ok(self.collidables.remove(index).1)
    }

    pub fn get(&self, id: CollidableId) -> Result<&dyn Collidable, EnvironmentError> {
        let index = self.index_of(id)?;
        Ok(self.collidables[index].1.as_ref())
    }

    pub fn set_collidable_origin(
        &mut self,
        id: CollidableId,
        origin: Point,
    ) -> Result<(), EnvironmentError> {
        let index = self.index_of(id)?;
        self.collidables[index].1.set_origin(origin);
        Ok(())
    }

    /// Notifies the struck obstacle and returns the velocity it sends the body off with.
    pub fn hit(
        &mut self,
        id: CollidableId,
        point: Point,
        velocity: Velocity,
    ) -> Result<Velocity, EnvironmentError> {
        let index = self.index_of(id)?;
        let tolerance = self.config.tolerance;
        Ok(self.collidables[index].1.hit(point, velocity, tolerance))
    }

    /// The collision a body moving along `movement` runs into, if any.
    pub fn closest_collision(&self, movement: &Line) -> Option<CollisionInfo> {
        let tolerance = self.config.tolerance;
        let mut candidates = self.collidables.iter().filter_map(|(id, collidable)| {
            movement
                .closest_intersection_to_start_of_line(collidable.collision_rectangle(), tolerance)
                .map(|point| (*id, collidable, point))
        });

        let (id, collidable, point) = match self.config.scan_policy {
            ScanPolicy::FirstMatch => candidates.next()?,
            ScanPolicy::Nearest => candidates.min_by(|(_, _, a), (_, _, b)| {
                movement
                    .start()
                    .distance(*a)
                    .total_cmp(&movement.start().distance(*b))
            })?,
        };

        let edge = collidable.collision_edge(point, tolerance);
        if edge.is_none() {
            warn!("collision with {id} at {point} is not on any edge");
        }
        Some(CollisionInfo::new(point, id, edge))
    }

    fn index_of(&self, id: CollidableId) -> Result<usize, EnvironmentError> {
        self.collidables
            .iter()
            .position(|(candidate, _)| *candidate == id)
            .ok_or(EnvironmentError::UnknownCollidable(id))
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum EnvironmentError {
    #[error("unknown collidable {0}")]
    UnknownCollidable(CollidableId),
}
