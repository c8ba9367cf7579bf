//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique, typed ID.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id` inside an ordered sequence
pub fn position_of<T: Entity>(seq: &[T], id: T::Id) -> Option<usize> {
    seq.iter().position(|entity| entity.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Import text failed to parse or lacks the expected arrays
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Drop payload kind does not match the target, or nothing was dragged
    #[error("Invalid drop target: {0}")]
    InvalidDropTarget(String),
    /// Color string is neither hex nor rgb()/rgba()
    #[error("Unresolvable color: {0}")]
    UnresolvableColor(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Containment or mirror invariant broken
    #[error("Inconsistent model: {0}")]
    Inconsistent(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether the error should be shown to the user rather than swallowed
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DomainError::MalformedInput(_) | DomainError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Probe(u8);

    impl Entity for Probe {
        type Id = u8;

        fn id(&self) -> Self::Id {
            self.0
        }
    }

    #[test]
    fn test_position_of() {
        let seq = vec![Probe(4), Probe(9), Probe(2)];
        assert_eq!(position_of(&seq, 9), Some(1));
        assert_eq!(position_of(&seq, 7), None);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::MalformedInput("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Malformed input: expected value at line 1 column 1");
        assert!(err.is_user_facing());
        assert!(!DomainError::InvalidDropTarget("x".into()).is_user_facing());
    }
}
