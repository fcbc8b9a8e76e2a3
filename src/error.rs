//! Custom error types for teller-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for teller-cli operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (opening, rewriting or appending to the clients file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Withdrawal amount exceeds the available balance
    #[error("Insufficient funds for account '{account}': need {needed:.2}, have {available:.2}")]
    InsufficientFunds {
        account: String,
        needed: f64,
        available: f64,
    },
}

impl TellerError {
    /// Create a "not found" error for client records
    pub fn client_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for client records
    pub fn client_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an insufficient-funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for teller-cli operations
pub type TellerResult<T> = Result<T, TellerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TellerError::Validation("bad amount".into());
        assert_eq!(err.to_string(), "Validation error: bad amount");
    }

    #[test]
    fn test_not_found_error() {
        let err = TellerError::client_not_found("A102");
        assert_eq!(err.to_string(), "Client not found: A102");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = TellerError::InsufficientFunds {
            account: "A102".into(),
            needed: 150.0,
            available: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds for account 'A102': need 150.00, have 100.00"
        );
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let teller_err: TellerError = io_err.into();
        assert!(matches!(teller_err, TellerError::Io(_)));
    }
}
