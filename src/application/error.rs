// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Provider failures travel untouched inside `Domain`; callers match on the
/// inner `DomainError` variant to tell not-found from infrastructure faults.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Inner domain error, if this error came from a provider or a domain rule.
    pub const fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Validation(_) => None,
        }
    }

    /// Caller input that failed domain validation is reported as
    /// `Validation`; everything else keeps its domain identity.
    pub(crate) fn from_input(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            other => Self::Domain(other),
        }
    }
}
