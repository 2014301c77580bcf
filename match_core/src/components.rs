use glam::Vec2;
use proto::Side;

use crate::params::Params;
use crate::playfield::Aabb;

/// The pong ball. One exists per match, created once and repositioned
/// (never recreated) when a point is scored.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(Params::BALL_INITIAL_DX, Params::BALL_INITIAL_DY),
            radius: Params::BALL_RADIUS,
        }
    }

    /// Recentre the ball after a point. Velocity is left untouched, so
    /// any speed accumulated during the match carries into the next rally.
    pub fn reset(&mut self, playfield_width: f32, playfield_height: f32) {
        self.pos = Vec2::new(playfield_width / 2.0, playfield_height / 2.0);
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Scale both velocity components by `factor`.
    pub fn increase_speed(&mut self, factor: i32) {
        self.vel *= factor as f32;
    }

    /// Bounding box used for paddle intersection tests.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// A player's paddle. Horizontal position and width are fixed for the
/// match; height may only grow.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self {
            side,
            x,
            y,
            width: Params::PADDLE_WIDTH,
            height: Params::PADDLE_HEIGHT,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }
}

/// Movement intent for a paddle.
///
/// Deliberately two independent flags rather than an enum: both may be
/// held at once, in which case the per-tick update moves the paddle up
/// and back down for a net displacement of zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_up(&mut self) {
        self.up = true;
    }

    pub fn press_down(&mut self) {
        self.down = true;
    }

    /// A key release stops the paddle entirely: both flags are cleared.
    pub fn release(&mut self) {
        self.up = false;
        self.down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_starts_with_unit_velocity() {
        let ball = Ball::new(Vec2::new(500.0, 500.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
        assert_eq!(ball.radius, Params::BALL_RADIUS);
    }

    #[test]
    fn test_ball_reverse_is_idempotent_in_pairs() {
        let mut ball = Ball::new(Vec2::new(500.0, 500.0));
        ball.increase_speed(3);
        let vel = ball.vel;

        ball.reverse_x();
        ball.reverse_x();
        assert_eq!(ball.vel, vel);

        ball.reverse_y();
        ball.reverse_y();
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_ball_increase_speed_scales_both_axes() {
        let mut ball = Ball::new(Vec2::new(500.0, 500.0));
        ball.reverse_y();
        ball.increase_speed(4);
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_ball_reset_recentres_but_keeps_velocity() {
        let mut ball = Ball::new(Vec2::new(3.0, 997.0));
        ball.increase_speed(5);
        let vel = ball.vel;

        ball.reset(1000.0, 800.0);

        assert_eq!(ball.pos, Vec2::new(500.0, 400.0));
        assert_eq!(ball.vel, vel, "reset must not touch the velocity");
    }

    #[test]
    fn test_paddle_bounds() {
        let paddle = Paddle::new(Side::Left, 10.0, 450.0);
        let bounds = paddle.bounds();
        assert_eq!(bounds.min, Vec2::new(10.0, 450.0));
        assert_eq!(bounds.max, Vec2::new(20.0, 550.0));
    }

    #[test]
    fn test_intent_flags_are_independent() {
        let mut intent = PaddleIntent::new();
        intent.press_up();
        intent.press_down();
        assert!(intent.up && intent.down, "both flags can be held at once");

        intent.release();
        assert!(!intent.up && !intent.down);
    }
}
