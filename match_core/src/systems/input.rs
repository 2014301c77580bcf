use hecs::World;
use proto::{Side, VerticalDir};

use crate::components::{Paddle, PaddleIntent};

/// Key press: raise one movement flag on the given side's paddle.
pub fn start_movement(world: &mut World, side: Side, dir: VerticalDir) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            match dir {
                VerticalDir::Up => intent.press_up(),
                VerticalDir::Down => intent.press_down(),
            }
        }
    }
}

/// Key release: clear both movement flags for that side, regardless of
/// which direction key was released.
pub fn stop_movement(world: &mut World, side: Side) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn intent_for(world: &World, side: Side) -> PaddleIntent {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _i))| p.side == side)
            .map(|(_e, (_p, i))| *i)
            .unwrap()
    }

    #[test]
    fn test_start_movement_targets_one_side() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 10.0, 450.0);
        create_paddle(&mut world, Side::Right, 980.0, 450.0);

        start_movement(&mut world, Side::Left, VerticalDir::Up);

        assert!(intent_for(&world, Side::Left).up);
        assert!(!intent_for(&world, Side::Right).up);
    }

    #[test]
    fn test_stop_movement_clears_both_flags() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, 980.0, 450.0);

        start_movement(&mut world, Side::Right, VerticalDir::Up);
        start_movement(&mut world, Side::Right, VerticalDir::Down);
        let intent = intent_for(&world, Side::Right);
        assert!(intent.up && intent.down);

        // Releasing the down key stops the up intent too.
        stop_movement(&mut world, Side::Right);
        let intent = intent_for(&world, Side::Right);
        assert!(!intent.up && !intent.down);
    }
}
