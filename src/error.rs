//! Error types for the work-time rule core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the rule repository and its workflows.
//!
//! Gating conditions (an empty wizard name, navigation past a boundary step)
//! are deliberately *not* represented here: they refuse the transition and
//! leave state unchanged instead of raising an error.

use thiserror::Error;

/// The main error type for the work-time rule core.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_rules::error::RuleError;
///
/// let error = RuleError::RuleNotFound {
///     id: "R-999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule not found: R-999");
/// ```
#[derive(Debug, Error)]
pub enum RuleError {
    /// Seed file was not found at the specified path.
    #[error("Seed file not found: {path}")]
    SeedNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Seed file could not be parsed.
    #[error("Failed to parse seed file '{path}': {message}")]
    SeedParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An operation referenced a rule id that is not in the repository.
    #[error("Rule not found: {id}")]
    RuleNotFound {
        /// The rule id that was not found.
        id: String,
    },

    /// An insert collided with an id already present in the repository.
    #[error("Duplicate rule id: {id}")]
    DuplicateId {
        /// The colliding rule id.
        id: String,
    },

    /// A replace was called with a rule whose id differs from the target.
    #[error("Identity mismatch: expected '{expected}', found '{found}'")]
    IdentityMismatch {
        /// The id of the repository entry being replaced.
        expected: String,
        /// The id carried by the replacement rule.
        found: String,
    },

    /// A time-of-day value was outside the 00:00..23:59 range.
    #[error("Invalid time value: {value}")]
    InvalidTime {
        /// The rejected value, rendered as "HH:MM".
        value: String,
    },
}

/// A type alias for Results that return RuleError.
pub type RuleResult<T> = Result<T, RuleError>;
