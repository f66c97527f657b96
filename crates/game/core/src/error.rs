//! Common error infrastructure for game-core.
//!
//! Game-logic failure (a blocked move, no target, nothing to pick up) is not
//! an error at all: it is an [`ActionResult::Impossible`](crate::action::ActionResult)
//! value. The types here cover the remaining classes:
//!
//! - **Validation**: a layout that cannot become a world.
//! - **Internal**: scheduler invariant violations such as double-scheduling an
//!   actor or popping an empty queue. These indicate a defect and must abort.
//! - **Fatal**: deliberate, unrecoverable termination (the primary entity was
//!   defeated).

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - scheduler bookkeeping is inconsistent.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the session cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
