use thiserror::Error;

/// Represents a pattern that cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("repetition minimum {min} exceeds maximum {max}")]
    InvertedCountRange { min: usize, max: usize },
    #[error("repetition count range {0} is empty")]
    EmptyCountRange(String),
}
