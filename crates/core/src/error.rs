//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced entity does not exist. Carries the entity kind so the
    /// caller can tell which reference was dangling.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A stock deduction would drive a product's stock below zero.
    #[error("not enough stock (requested {requested}, available {available})")]
    InsufficientStock { requested: i64, available: i64 },

    /// The operation is blocked by existing references (e.g. deleting a
    /// product that order items still point at).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed in a way the domain cannot recover from.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound(entity)
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("product");
        assert_eq!(err.to_string(), "product not found");
    }

    #[test]
    fn insufficient_stock_reports_both_sides() {
        let err = DomainError::insufficient_stock(5, 3);
        assert_eq!(
            err.to_string(),
            "not enough stock (requested 5, available 3)"
        );
    }
}
