//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid option values.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidChoice {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
