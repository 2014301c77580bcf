//! Fixed-step simulation core for a two-player Pong match.
//!
//! The [`MatchController`] owns one ball and two paddles inside a
//! [`hecs::World`], advances them one step per external `tick()` call,
//! and reports render-ready state through `proto::Snapshot`. Everything
//! window-, input-device- and font-shaped lives on the far side of the
//! `proto` boundary.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod params;
pub mod playfield;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use params::*;
pub use playfield::*;
pub use resources::*;

use hecs::World;
use proto::Side;

/// Helper to create the ball entity at the given centre position.
pub fn create_ball(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos),))
}

/// Helper to create a paddle entity with a cleared movement intent.
pub fn create_paddle(world: &mut World, side: Side, x: f32, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x, y), PaddleIntent::new()))
}
