//! Client record model
//!
//! Represents one bank client as stored in the clients file.

use std::fmt;

/// Field delimiter used by the clients file format.
///
/// Multi-character on purpose so it does not collide with ordinary text.
/// The format has no escaping, so field values must never contain it;
/// [`ClientRecord::validate`] guards this at the creation/update boundary.
pub const FIELD_DELIMITER: &str = "#//#";

/// A bank client record
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    /// Unique account number; immutable after creation, used as the lookup key
    pub account_number: String,

    /// Opaque credential text; no hashing or validation is performed
    pub pin_code: String,

    /// Client display name
    pub name: String,

    /// Client phone number (free-form)
    pub phone: String,

    /// Current balance
    pub balance: f64,

    /// In-memory soft-delete marker; never persisted. True between
    /// "marked for delete" and "storage rewritten".
    pub pending_delete: bool,
}

/// The mutable field set applied by an update; the account number is
/// preserved and cannot be replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientUpdate {
    pub pin_code: String,
    pub name: String,
    pub phone: String,
    pub balance: f64,
}

impl ClientRecord {
    /// Create a new client record
    pub fn new(
        account_number: impl Into<String>,
        pin_code: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            pin_code: pin_code.into(),
            name: name.into(),
            phone: phone.into(),
            balance,
            pending_delete: false,
        }
    }

    /// Return a copy of this record with a new balance
    pub fn with_balance(&self, balance: f64) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }

    /// Apply an update, preserving the account number and delete marker
    pub fn apply_update(&self, update: ClientUpdate) -> Self {
        Self {
            account_number: self.account_number.clone(),
            pin_code: update.pin_code,
            name: update.name,
            phone: update.phone,
            balance: update.balance,
            pending_delete: self.pending_delete,
        }
    }

    /// Validate the record against the storage format contract
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.account_number.trim().is_empty() {
            return Err(ClientValidationError::EmptyAccountNumber);
        }

        for (field, value) in [
            ("account number", &self.account_number),
            ("pin code", &self.pin_code),
            ("name", &self.name),
            ("phone", &self.phone),
        ] {
            if value.contains(FIELD_DELIMITER) {
                return Err(ClientValidationError::FieldContainsDelimiter(field));
            }
        }

        if !self.balance.is_finite() {
            return Err(ClientValidationError::NonFiniteBalance);
        }

        Ok(())
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_number)
    }
}

/// Validation errors for client records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyAccountNumber,
    FieldContainsDelimiter(&'static str),
    NonFiniteBalance,
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAccountNumber => write!(f, "Account number cannot be empty"),
            Self::FieldContainsDelimiter(field) => {
                write!(f, "The {} may not contain '{}'", field, FIELD_DELIMITER)
            }
            Self::NonFiniteBalance => write!(f, "Balance must be a finite number"),
        }
    }
}

impl std::error::Error for ClientValidationError {}
