use crate::engine::ScheduleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised while turning generator output into a live world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("layout has no player placement")]
    MissingPlayer,

    #[error("layout has {count} player placements, expected exactly one")]
    MultiplePlayers { count: usize },

    #[error("placement at {position} lies outside the grid")]
    OutOfBounds { position: Position },

    #[error("entity id space exhausted")]
    IdsExhausted,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingPlayer | Self::MultiplePlayers { .. } | Self::OutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
            Self::IdsExhausted => ErrorSeverity::Fatal,
            Self::Schedule(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPlayer => "SPAWN_MISSING_PLAYER",
            Self::MultiplePlayers { .. } => "SPAWN_MULTIPLE_PLAYERS",
            Self::OutOfBounds { .. } => "SPAWN_OUT_OF_BOUNDS",
            Self::IdsExhausted => "SPAWN_IDS_EXHAUSTED",
            Self::Schedule(error) => error.error_code(),
        }
    }
}
