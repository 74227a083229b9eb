//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `EncounterError`, `OracleError`) are defined in
//! their respective modules alongside the operations they validate. Everything
//! here is shared classification.
//!
//! Combat itself never fails: acting with or against a dead participant is a
//! refused no-op reported through [`crate::combat::AttackOutcome::Refused`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with a different action
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: missing content or broken preconditions, the encounter cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: action submitted while a phase is still resolving
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: roster size out of range, unknown weapon handle
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - required content is missing.
    ///
    /// Examples: empty monster catalog, missing oracle
    Fatal,
}

/// Common trait for all game-core errors.
///
/// Implementations use `#[derive(thiserror::Error)]` for `Display`/`Error` and
/// classify severity based on recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, log fields, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
