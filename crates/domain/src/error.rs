//! Unified error types for the domain layer
//!
//! Provides a common error type usable across all domain operations,
//! enabling consistent error handling without forcing callers to use
//! String or ad hoc error enums per module.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// A move referenced a cell outside the grid
    #[error("Out of bounds: row {row}, col {col} on a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl DomainError {
    /// Creates a validation error for malformed inputs.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a constraint error for business rule violations,
    /// e.g. firing while a quiz gate is still outstanding.
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates an invalid-transition error for screen/state machine misuse.
    pub fn transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
