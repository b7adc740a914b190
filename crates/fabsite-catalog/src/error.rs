//! Catalog error types.

use fabsite_store::StoreError;
use thiserror::Error;

use crate::forms::ValidationErrors;

/// Errors that can occur in catalog operations.
///
/// None of these are fatal for a page: a failed interaction is reported
/// and the page keeps working.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Persisting a collection failed. The in-memory change is kept.
    #[error("Failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: StoreError,
    },

    /// Quantity below one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The submit collaborator rejected the request.
    #[error("Submission failed: {0}")]
    Submission(String),
}

impl CatalogError {
    pub(crate) fn persist(key: &str, source: StoreError) -> Self {
        CatalogError::Persist {
            key: key.to_string(),
            source,
        }
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(e: ValidationErrors) -> Self {
        CatalogError::Validation(e)
    }
}
