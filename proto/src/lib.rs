//! Presentation boundary for the Pong match simulation.
//!
//! The simulation core knows nothing about windows, key codes, or fonts.
//! This crate defines the two directions of traffic across that boundary:
//! discrete [`InputEvent`]s flowing in, and a render-ready [`Snapshot`]
//! flowing out once per tick.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// Which side of the playfield a player (or paddle, or score) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical direction of a paddle movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDir {
    Up,
    Down,
}

/// Match lifecycle phase.
///
/// `Ended` is terminal; `Running` and `Paused` toggle via explicit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Running,
    Paused,
    Ended,
}

// ============================================================================
// Adapter -> Core (input events)
// ============================================================================

/// Discrete input event forwarded by the presentation adapter.
///
/// One `MoveStart`/`MoveStop` pair exists per side and direction, mirroring
/// key-down/key-up. Note that `MoveStop` halts ALL movement for that side
/// regardless of its direction: a key release clears both intent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveStart { side: Side, dir: VerticalDir },
    MoveStop { side: Side, dir: VerticalDir },
    Pause,
    Resume,
}

// ============================================================================
// Core -> Adapter (render state)
// ============================================================================

/// Display-only colour attribute. The core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Red,
    Green,
}

/// Capability consumed only by the presentation adapter: anything it can
/// draw as an axis-aligned rectangle of some colour.
pub trait Drawable {
    /// Top-left corner of the drawn bounding box.
    fn position(&self) -> (f32, f32);
    /// Width and height of the drawn bounding box.
    fn size(&self) -> (f32, f32);
    fn color(&self) -> Color;
}

/// Ball render state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    /// Centre position.
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Drawable for BallView {
    fn position(&self) -> (f32, f32) {
        (self.x - self.radius, self.y - self.radius)
    }

    fn size(&self) -> (f32, f32) {
        (self.radius * 2.0, self.radius * 2.0)
    }

    fn color(&self) -> Color {
        Color::White
    }
}

/// Paddle render state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    /// Top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Drawable for PaddleView {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn color(&self) -> Color {
        match self.side {
            Side::Left => Color::Blue,
            Side::Right => Color::Red,
        }
    }
}

/// Everything the adapter needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: MatchPhase,
    pub ball: BallView,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    pub left_score: u32,
    pub right_score: u32,
    /// Set exactly once, when the match transitions to `Ended`.
    pub winner: Option<String>,
}
