//! Error types and error codes for fleetmeta
//!
//! This module defines:
//! - `MetaError`: the application error taxonomy
//! - `ErrorCode`: structured error codes for API responses

use serde::{Deserialize, Serialize};

/// Application-specific error types.
///
/// Repositories and services return these to the caller without retry;
/// the routing layer alone maps them to client-visible status codes.
#[derive(thiserror::Error, Debug)]
pub enum MetaError {
    /// Zero rows for a by-id or by-natural-key lookup.
    #[error("{kind} with {key} not found")]
    NotFound { kind: &'static str, key: String },

    /// More than one row for a lookup expected to be unique.
    /// A data-integrity fault, surfaced rather than silently resolved.
    #[error("duplicate {kind} rows with {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// Required or referenced field names are not declared for the kind.
    #[error("{kind} has no field(s): {names}")]
    FieldNotExists { kind: &'static str, names: String },

    /// The field exists but is read-only to the application.
    #[error("field '{name}' of {kind} is not settable")]
    FieldNotSettable { kind: &'static str, name: &'static str },

    /// The supplied value does not match the field's declared type.
    #[error("field '{name}' of {kind} expects {expected}")]
    FieldTypeMismatch {
        kind: &'static str,
        name: &'static str,
        expected: &'static str,
    },

    /// The supplied value has the declared type but fails the field's
    /// content rule (name charset, IPv4 form, port range).
    #[error("field '{name}' of {kind} is invalid: {reason}")]
    FieldInvalid {
        kind: &'static str,
        name: &'static str,
        reason: &'static str,
    },

    /// Duplicate junction-row insert, or delete of a non-existent pair.
    #[error("relationship conflict: {0}")]
    RelationshipConflict(String),

    /// Begin/commit/rollback failure on a cascading hard delete.
    #[error("transaction failure: {0}")]
    TransactionFailure(String),

    /// External advisor invocation, output parsing, or target resolution
    /// failure.
    #[error("sql advisor: {0}")]
    Advisor(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl MetaError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn duplicate_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }
}

/// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const FIELD_VALIDATION_ERROR: ErrorCode<'static> = ErrorCode {
    code: 40000,
    message: "field validation error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 40400,
    message: "resource not found",
};

pub const DUPLICATE_KEY: ErrorCode<'static> = ErrorCode {
    code: 40900,
    message: "duplicate key",
};

pub const RELATIONSHIP_CONFLICT: ErrorCode<'static> = ErrorCode {
    code: 40901,
    message: "relationship conflict",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 50000,
    message: "server error",
};

pub const TRANSACTION_ERROR: ErrorCode<'static> = ErrorCode {
    code: 50001,
    message: "transaction error",
};

pub const ADVISOR_ERROR: ErrorCode<'static> = ErrorCode {
    code: 50200,
    message: "sql advisor error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_error_display() {
        let err = MetaError::not_found("app", "id 3");
        assert_eq!(format!("{}", err), "app with id 3 not found");

        let err = MetaError::duplicate_key("db", "db_name 'orders'");
        assert_eq!(format!("{}", err), "duplicate db rows with db_name 'orders'");

        let err = MetaError::FieldNotSettable {
            kind: "env",
            name: "create_time",
        };
        assert_eq!(format!("{}", err), "field 'create_time' of env is not settable");
    }

    #[test]
    fn test_error_code_constants() {
        assert_eq!(SUCCESS.code, 0);
        assert_eq!(RESOURCE_NOT_FOUND.code, 40400);
        assert_eq!(ADVISOR_ERROR.code, 50200);
    }
}
