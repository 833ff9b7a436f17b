use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Expected a number")]
    InvalidInput,

    #[error("Territory index {index} is out of range (valid: 0..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("You can only attack from a territory controlled by your own faction")]
    IllegalAttackSource,

    #[error("You cannot attack a territory you already control")]
    IllegalAttackTarget,

    #[error("Attacking requires more than 1 troop in the origin territory")]
    InsufficientTroops,

    #[error("Unknown menu option: {0}")]
    InvalidOption(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Recoverable errors are reported and the game loop keeps running.
    /// IO failures are not: they mean the console itself is gone.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
