//! Catalog error types.

use common::ProductId;
use thiserror::Error;

use crate::product::{ProductError, ValidationError};
use crate::repository::RepositoryError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed value-object validation.
    #[error("Validation failed for {}: {}", .0.field(), .0)]
    Validation(ValidationError),

    /// A product business rule was violated.
    #[error("Product error: {0}")]
    Product(ProductError),

    /// No product is stored under the id.
    #[error("Product not found with id: {0}")]
    ProductNotFound(ProductId),

    /// An error occurred in the repository.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<ValidationError> for DomainError {
    fn from(e: ValidationError) -> Self {
        DomainError::Validation(e)
    }
}

impl From<ProductError> for DomainError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::Validation(v) => DomainError::Validation(v),
            other => DomainError::Product(other),
        }
    }
}
