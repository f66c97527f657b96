//! Error types for the scheduler and simulation driver.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Tick};

/// Errors raised by the turn queue.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("turn queue is empty at tick {time}")]
    EmptyQueue { time: Tick },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyQueue { .. } => "TURN_EMPTY_QUEUE",
        }
    }
}

/// Actor lifecycle invariant violations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("actor {entity} is already waiting on a scheduled turn")]
    AlreadyScheduled { entity: EntityId },

    #[error("entity {entity} has no actor capability")]
    NotAnActor { entity: EntityId },
}

impl GameError for ScheduleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyScheduled { .. } => "SCHEDULE_ALREADY_SCHEDULED",
            Self::NotAnActor { .. } => "SCHEDULE_NOT_AN_ACTOR",
        }
    }
}

/// Errors surfaced by [`World::simulate`](crate::state::World::simulate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// Deliberate hard stop. Not retryable.
    #[error("primary entity {entity} was defeated at tick {tick}")]
    PrimaryDefeated { entity: EntityId, tick: Tick },

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl GameError for SimulationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PrimaryDefeated { .. } => ErrorSeverity::Fatal,
            Self::Turn(err) => err.severity(),
            Self::Schedule(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PrimaryDefeated { .. } => "SIMULATION_PRIMARY_DEFEATED",
            Self::Turn(err) => err.error_code(),
            Self::Schedule(err) => err.error_code(),
        }
    }
}
