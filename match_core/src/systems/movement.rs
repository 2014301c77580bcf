use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::params::Params;
use crate::playfield::Playfield;

/// Integrate the ball one tick: position += velocity. No bounds checks
/// here; walls are handled by the collision pass.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply paddle movement intents. Both branches run every tick and are
/// not mutually exclusive: a paddle with both flags raised moves up and
/// back down, staying put as long as it is away from the walls.
pub fn move_paddles(world: &mut World, playfield: &Playfield) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up && paddle.y > 0.0 {
            paddle.y -= Params::PADDLE_SPEED;
        }
        if intent.down && paddle.y < playfield.height - paddle.height {
            paddle.y += Params::PADDLE_SPEED;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;
    use proto::{Side, VerticalDir};

    fn paddle_y(world: &World) -> f32 {
        world.query::<&Paddle>().iter().next().unwrap().1.y
    }

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(500.0, 500.0));

        move_ball(&mut world);
        move_ball(&mut world);

        let ball = *world.query::<&Ball>().iter().next().unwrap().1;
        assert_eq!(ball.pos, Vec2::new(502.0, 502.0));
    }

    #[test]
    fn test_paddle_moves_five_units_per_tick() {
        let mut world = World::new();
        let playfield = Playfield::new(1000.0, 1000.0);
        create_paddle(&mut world, Side::Left, 10.0, 450.0);
        crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Up);

        move_paddles(&mut world, &playfield);
        assert_eq!(paddle_y(&world), 445.0);

        move_paddles(&mut world, &playfield);
        assert_eq!(paddle_y(&world), 440.0);
    }

    #[test]
    fn test_opposing_intents_cancel_out() {
        let mut world = World::new();
        let playfield = Playfield::new(1000.0, 1000.0);
        create_paddle(&mut world, Side::Left, 10.0, 450.0);
        crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Up);
        crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Down);

        move_paddles(&mut world, &playfield);

        assert_eq!(paddle_y(&world), 450.0, "up and down should cancel");
    }

    #[test]
    fn test_paddle_stops_at_top_edge() {
        let mut world = World::new();
        let playfield = Playfield::new(1000.0, 1000.0);
        create_paddle(&mut world, Side::Left, 10.0, 450.0);
        crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Up);

        for _ in 0..200 {
            move_paddles(&mut world, &playfield);
        }

        assert_eq!(paddle_y(&world), 0.0);
    }

    #[test]
    fn test_paddle_stops_at_bottom_edge() {
        let mut world = World::new();
        let playfield = Playfield::new(1000.0, 1000.0);
        create_paddle(&mut world, Side::Right, 980.0, 450.0);
        crate::systems::input::start_movement(&mut world, Side::Right, VerticalDir::Down);

        for _ in 0..200 {
            move_paddles(&mut world, &playfield);
        }

        let paddle = *world.query::<&Paddle>().iter().next().unwrap().1;
        assert_eq!(paddle.y, playfield.height - paddle.height);
    }

    #[test]
    fn test_paddle_stays_in_bounds_under_mixed_input() {
        let mut world = World::new();
        let playfield = Playfield::new(1000.0, 1000.0);
        create_paddle(&mut world, Side::Left, 10.0, 450.0);

        // Alternate long runs in each direction, with some overlap.
        for step in 0..600 {
            match step % 7 {
                0 => crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Up),
                3 => {
                    crate::systems::input::start_movement(&mut world, Side::Left, VerticalDir::Down)
                }
                5 => crate::systems::input::stop_movement(&mut world, Side::Left),
                _ => {}
            }
            move_paddles(&mut world, &playfield);

            let paddle = *world.query::<&Paddle>().iter().next().unwrap().1;
            assert!(
                paddle.y >= 0.0 && paddle.y <= playfield.height - paddle.height,
                "paddle left its bounds at y = {}",
                paddle.y
            );
        }
    }
}
