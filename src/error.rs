//! Error types for formgate

use thiserror::Error;

use crate::domain::field::FieldId;

/// Engine error type
///
/// Only initialization and lifecycle faults live here. Validation failures
/// are values ([`crate::domain::rules::RuleViolation`]), surfaced inline and
/// never propagated as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Surface registry has no binding for a tracked field
    #[error("no binding registered for field: {0}")]
    MissingBinding(FieldId),

    /// Session already completed its one-way success transition
    #[error("form already submitted")]
    AlreadySubmitted,
}

/// Result type for formgate
pub type Result<T> = std::result::Result<T, FormError>;
