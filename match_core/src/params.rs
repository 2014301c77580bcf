/// Fixed tuning parameters for the match simulation.
///
/// Distances are in playfield units; speeds are units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 1000.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1000.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const PADDLE_INSET: f32 = 10.0; // gap between side wall and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_INITIAL_DX: f32 = 1.0;
    pub const BALL_INITIAL_DY: f32 = 1.0;
    // Applied on every top/bottom bounce. A factor of 1 leaves the speed
    // unchanged; escalation only ever comes from increase_ball_speed.
    pub const WALL_BOUNCE_SPEEDUP: i32 = 1;

    // Score
    pub const DEFAULT_WIN_SCORE: u32 = 5;
}
