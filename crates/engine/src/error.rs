//! The module contains the errors the engine can throw.
//!
//! Client mistakes:
//!
//! - [`MissingField`] a required field of a create payload is absent.
//! - [`ReferenceNotFound`] a payload points at a user that does not exist.
//! - [`Validation`] a value has the right type but an unusable shape.
//! - [`InvalidDate`] / [`InvalidQuery`] a list filter could not be parsed.
//!
//! [`KeyNotFound`] is thrown when the addressed record is absent, and
//! [`Database`] wraps every unexpected store failure.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`ReferenceNotFound`]: EngineError::ReferenceNotFound
//!  [`Validation`]: EngineError::Validation
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidQuery`]: EngineError::InvalidQuery
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Referenced {0} not found")]
    ReferenceNotFound(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("Invalid value: {0}")]
    Validation(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::ReferenceNotFound(a), Self::ReferenceNotFound(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::InvalidQuery(a), Self::InvalidQuery(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
