use proto::Side;

use crate::error::MatchError;
use crate::params::Params;

/// Construction-time configuration supplied by the presentation adapter.
///
/// The optional tuning amounts come from the adapter's startup dialogs
/// and are applied once by the controller constructor; the same mutators
/// remain callable at any point during the match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub left_player: String,
    pub right_player: String,
    pub winning_score: u32,
    pub ball_speed_increase: Option<i32>,
    pub racket_height_increase: Option<f32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            left_player: "Player 1".to_string(),
            right_player: "Player 2".to_string(),
            winning_score: Params::DEFAULT_WIN_SCORE,
            ball_speed_increase: None,
            racket_height_increase: None,
        }
    }
}

impl MatchConfig {
    pub fn new(left_player: impl Into<String>, right_player: impl Into<String>, winning_score: u32) -> Self {
        Self {
            left_player: left_player.into(),
            right_player: right_player.into(),
            winning_score,
            ..Self::default()
        }
    }

    /// Numeric inputs are assumed pre-validated by the adapter, but a
    /// zero winning score or a degenerate playfield would make the match
    /// unwinnable or unplayable, so those are rejected outright.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.winning_score == 0 {
            return Err(MatchError::InvalidConfiguration(
                "winning score must be at least 1".to_string(),
            ));
        }
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(MatchError::InvalidConfiguration(format!(
                "playfield dimensions must be positive, got {}x{}",
                self.playfield_width, self.playfield_height
            )));
        }
        Ok(())
    }

    /// Fixed horizontal position for a side's paddle.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_INSET,
            Side::Right => self.playfield_width - Params::PADDLE_INSET - Params::PADDLE_WIDTH,
        }
    }

    /// Vertical spawn position centring the paddle on the playfield.
    pub fn paddle_spawn_y(&self) -> f32 {
        self.playfield_height / 2.0 - Params::PADDLE_HEIGHT / 2.0
    }

    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_player,
            Side::Right => &self.right_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_positions() {
        let config = MatchConfig::default();
        assert_eq!(config.paddle_x(Side::Left), 10.0);
        assert_eq!(config.paddle_x(Side::Right), 980.0);
    }

    #[test]
    fn test_paddle_spawn_is_centred() {
        let config = MatchConfig::default();
        assert_eq!(config.paddle_spawn_y(), 450.0);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_winning_score() {
        let config = MatchConfig::new("a", "b", 0);
        assert!(matches!(
            config.validate(),
            Err(MatchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_playfield() {
        let mut config = MatchConfig::default();
        config.playfield_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.playfield_height = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_player_name_lookup() {
        let config = MatchConfig::new("Ada", "Grace", 3);
        assert_eq!(config.player_name(Side::Left), "Ada");
        assert_eq!(config.player_name(Side::Right), "Grace");
    }
}
