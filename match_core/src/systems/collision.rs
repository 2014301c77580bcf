use hecs::World;

use crate::components::{Ball, Paddle};
use crate::params::Params;
use crate::playfield::Playfield;
use crate::resources::{Events, Score};

/// Wall pass for one tick. Runs strictly before the paddle pass.
///
/// A side wall contact scores a point for the opposite player, recentres
/// the ball and short-circuits the rest of this tick's checks; the caller
/// must skip the paddle pass when this returns `true`. Top and bottom
/// contacts bounce the ball instead.
pub fn check_wall_collision(
    world: &mut World,
    playfield: &Playfield,
    left_score: &mut Score,
    right_score: &mut Score,
    events: &mut Events,
) -> bool {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Left wall: point for the right player, rally over.
        if ball.pos.x - ball.radius <= 0.0 {
            right_score.increment();
            events.right_scored = true;
            ball.reset(playfield.width, playfield.height);
            return true;
        }

        // Right wall: point for the left player.
        if ball.pos.x + ball.radius >= playfield.width {
            left_score.increment();
            events.left_scored = true;
            ball.reset(playfield.width, playfield.height);
            return true;
        }

        // Top and bottom walls bounce.
        if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= playfield.height {
            ball.reverse_y();
            ball.increase_speed(Params::WALL_BOUNCE_SPEEDUP);
            events.ball_hit_wall = true;
        }
    }
    false
}

/// Paddle pass: a single X reversal when the ball's bounding box overlaps
/// either paddle's box. There is no positional push-out, so a ball still
/// overlapping on the next tick flips straight back.
pub fn check_paddle_collision(world: &mut World, events: &mut Events) {
    let ball_bounds = match world.query::<&Ball>().iter().next() {
        Some((_entity, ball)) => ball.bounds(),
        None => return,
    };

    let hit = world
        .query::<&Paddle>()
        .iter()
        .any(|(_entity, paddle)| paddle.bounds().intersects(&ball_bounds));

    if hit {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.reverse_x();
        }
        events.ball_hit_paddle = true;
    }
}
