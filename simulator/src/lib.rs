//! Collision engine for balls bouncing inside an arena of rectangular obstacles.


pub mod domain;
pub mod scene;
pub mod simulator;
