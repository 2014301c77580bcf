/// Per-side point counter. Starts at zero, only ever increments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }
}

/// What happened during the last tick, for the presentation adapter.
/// Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
