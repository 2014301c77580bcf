use hecs::{Entity, World};
use proto::{BallView, InputEvent, MatchPhase, PaddleView, Side, Snapshot};

use crate::components::{Ball, Paddle};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::playfield::Playfield;
use crate::resources::{Events, Score};
use crate::systems::{
    check_paddle_collision, check_wall_collision, move_ball, move_paddles, start_movement,
    stop_movement,
};
use crate::{create_ball, create_paddle};

/// Owns the match entities and runs the fixed-step update loop.
///
/// One external driver is expected to call [`tick`](MatchController::tick)
/// once per rendered frame. All mutation happens synchronously inside that
/// call; input events arriving between frames are applied immediately and
/// become visible on the next tick.
pub struct MatchController {
    pub world: World,
    pub config: MatchConfig,
    pub playfield: Playfield,
    pub left_score: Score,
    pub right_score: Score,
    pub events: Events,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
    pub tick_count: u64,
    pub ball: Entity,
    pub left_paddle: Entity,
    pub right_paddle: Entity,
}

impl MatchController {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;

        let playfield = Playfield::new(config.playfield_width, config.playfield_height);
        let mut world = World::new();

        let ball = create_ball(&mut world, playfield.center());
        let spawn_y = config.paddle_spawn_y();
        let left_paddle =
            create_paddle(&mut world, Side::Left, config.paddle_x(Side::Left), spawn_y);
        let right_paddle =
            create_paddle(&mut world, Side::Right, config.paddle_x(Side::Right), spawn_y);

        let mut controller = Self {
            world,
            playfield,
            left_score: Score::new(),
            right_score: Score::new(),
            events: Events::new(),
            phase: MatchPhase::Running,
            winner: None,
            tick_count: 0,
            ball,
            left_paddle,
            right_paddle,
            config,
        };

        // Startup tuning from the adapter's configuration dialogs; the same
        // mutators stay available for the rest of the match.
        if let Some(factor) = controller.config.ball_speed_increase {
            controller.increase_ball_speed(factor);
        }
        if let Some(amount) = controller.config.racket_height_increase {
            controller.increase_racket_height(amount);
        }

        log::info!(
            "match started: {} vs {}, first to {}",
            controller.config.left_player,
            controller.config.right_player,
            controller.config.winning_score
        );

        Ok(controller)
    }

    /// Advance the simulation by one fixed step. No-op unless running.
    pub fn tick(&mut self) {
        if self.phase != MatchPhase::Running {
            return;
        }

        self.events.clear();

        // 1. Move the ball.
        move_ball(&mut self.world);

        // 2. Wall pass. A point short-circuits the paddle pass this tick.
        let scored = check_wall_collision(
            &mut self.world,
            &self.playfield,
            &mut self.left_score,
            &mut self.right_score,
            &mut self.events,
        );

        // 3. Paddle pass.
        if !scored {
            check_paddle_collision(&mut self.world, &mut self.events);
        }

        // 4. Move both paddles.
        move_paddles(&mut self.world, &self.playfield);

        self.tick_count += 1;

        if self.events.left_scored {
            log::debug!(
                "point to {} ({}-{})",
                self.config.left_player,
                self.left_score.value,
                self.right_score.value
            );
        }
        if self.events.right_scored {
            log::debug!(
                "point to {} ({}-{})",
                self.config.right_player,
                self.left_score.value,
                self.right_score.value
            );
        }

        // 5. Win evaluation, after collision resolution.
        self.check_win_condition();
    }

    fn check_win_condition(&mut self) {
        if self.left_score.value >= self.config.winning_score
            || self.right_score.value >= self.config.winning_score
        {
            // Strictly-greater comparison: an exact tie goes to the right
            // player.
            let winner = if self.left_score.value > self.right_score.value {
                Side::Left
            } else {
                Side::Right
            };
            self.winner = Some(winner);
            self.phase = MatchPhase::Ended;
            log::info!(
                "match over: {} wins {}-{}",
                self.config.player_name(winner),
                self.left_score.value,
                self.right_score.value
            );
        }
    }

    /// Apply one discrete input event from the presentation adapter.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveStart { side, dir } => start_movement(&mut self.world, side, dir),
            // A key release stops the whole paddle, whichever key it was.
            InputEvent::MoveStop { side, .. } => stop_movement(&mut self.world, side),
            InputEvent::Pause => self.pause(),
            InputEvent::Resume => self.resume(),
        }
    }

    /// Freeze the simulation. Positions and scores stay as they are.
    pub fn pause(&mut self) {
        if self.phase == MatchPhase::Running {
            self.phase = MatchPhase::Paused;
            log::debug!("match paused at tick {}", self.tick_count);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == MatchPhase::Paused {
            self.phase = MatchPhase::Running;
            log::debug!("match resumed at tick {}", self.tick_count);
        }
    }

    /// Multiply the ball's velocity components by `factor`, immediately
    /// and permanently.
    pub fn increase_ball_speed(&mut self, factor: i32) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.increase_speed(factor);
        }
    }

    /// Grow both paddles. The new height is the LEFT paddle's current
    /// height plus `amount`, applied to both sides.
    pub fn increase_racket_height(&mut self, amount: f32) {
        let new_height = self
            .world
            .get::<&Paddle>(self.left_paddle)
            .map(|paddle| paddle.height + amount);
        if let Ok(new_height) = new_height {
            for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
                paddle.height = new_height;
            }
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| self.config.player_name(side))
    }

    /// Render-ready state for the presentation adapter.
    pub fn snapshot(&self) -> Snapshot {
        // Entities are created in the constructor and never despawned.
        let ball = *self.world.get::<&Ball>(self.ball).expect("ball exists");
        let left = *self
            .world
            .get::<&Paddle>(self.left_paddle)
            .expect("left paddle exists");
        let right = *self
            .world
            .get::<&Paddle>(self.right_paddle)
            .expect("right paddle exists");

        Snapshot {
            tick: self.tick_count,
            phase: self.phase,
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
            },
            left_paddle: paddle_view(&left),
            right_paddle: paddle_view(&right),
            left_score: self.left_score.value,
            right_score: self.right_score.value,
            winner: self.winner_name().map(str::to_string),
        }
    }
}

fn paddle_view(paddle: &Paddle) -> PaddleView {
    PaddleView {
        side: paddle.side,
        x: paddle.x,
        y: paddle.y,
        width: paddle.width,
        height: paddle.height,
    }
}
