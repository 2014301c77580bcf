use thiserror::Error;

/// Errors raised by the match simulation.
///
/// Construction is the only fallible operation; everything past a
/// validated configuration is total.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
