//! Client-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ValidationError};

/// Errors raised while reading or editing a client and its projects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No client row matched the requested id.
    #[error("Client not found: {0}")]
    NotFound(ClientId),

    /// Transport or store failure on a read.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Transport or store failure on a write.
    #[error("Update failed: {0}")]
    Update(String),

    #[error("Invalid client data: {0}")]
    Validation(#[from] ValidationError),

    /// An edit was submitted before any client finished loading.
    #[error("No client is loaded")]
    NotLoaded,
}

impl ClientError {
    pub fn fetch(message: impl Into<String>) -> Self {
        ClientError::Fetch(message.into())
    }

    pub fn update(message: impl Into<String>) -> Self {
        ClientError::Update(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::NotFound(_) => ErrorCode::ClientNotFound,
            ClientError::Fetch(_) => ErrorCode::FetchFailed,
            ClientError::Update(_) => ErrorCode::UpdateFailed,
            ClientError::Validation(_) => ErrorCode::ValidationFailed,
            ClientError::NotLoaded => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
