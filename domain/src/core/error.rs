//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The messages are shown to the operator verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("New votes value was not valid, try a positive number or zero")]
    InvalidVotes(String),

    #[error("New expected votes value was not valid, try a positive number")]
    InvalidExpectedVotes(String),

    #[error("The nodeid was not valid, try a positive number")]
    InvalidNodeId(String),
}

impl DomainError {
    /// The raw argument text that failed validation
    pub fn raw_value(&self) -> &str {
        match self {
            DomainError::InvalidVotes(raw)
            | DomainError::InvalidExpectedVotes(raw)
            | DomainError::InvalidNodeId(raw) => raw,
        }
    }
}
