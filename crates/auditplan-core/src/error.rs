//! Unified error types for auditplan

use thiserror::Error;

use crate::CatalogKind;

/// Unified error type for all auditplan operations
#[derive(Error, Debug)]
pub enum AuditPlanError {
    // Template store errors
    #[error("Unknown sector '{sector}' in {catalog} catalog")]
    UnknownSector { sector: String, catalog: CatalogKind },

    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuditPlanError {
    /// Shorthand for an [`AuditPlanError::InvalidInput`]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias using AuditPlanError
pub type Result<T> = std::result::Result<T, AuditPlanError>;
