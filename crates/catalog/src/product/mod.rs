//! Product aggregate and related types.

mod aggregate;
mod commands;
mod service;
mod value_objects;
mod views;

pub use aggregate::{Product, ProductRecord};
pub use commands::{CreateProduct, UpdateProduct};
pub use service::CatalogService;
pub use value_objects::{
    Currency, Description, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, Price, ProductName, Stock,
};
pub use views::{ProductListView, ProductView};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while constructing a value object.
///
/// A value object is never created in a partially valid state: either every
/// rule holds or construction fails with one of these variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or only whitespace.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Name exceeds the maximum length.
    #[error("Product name cannot exceed {max} characters (got {length})")]
    NameTooLong { length: usize, max: usize },

    /// Description exceeds the maximum length.
    #[error("Description cannot exceed {max} characters (got {length})")]
    DescriptionTooLong { length: usize, max: usize },

    /// Price is below zero.
    #[error("Price cannot be negative: {value}")]
    NegativePrice { value: Decimal },

    /// Price input cannot be represented as a decimal amount.
    #[error("Price is not a representable amount: {input}")]
    UnrepresentablePrice { input: String },

    /// Price arithmetic overflowed the decimal range.
    #[error("Price arithmetic overflowed")]
    PriceOverflow,

    /// Price is too large to be held with two decimal places.
    #[error("Price exceeds the supported range: {value}")]
    PriceOutOfRange { value: Decimal },

    /// Currency code is empty or only whitespace.
    #[error("Currency cannot be empty")]
    EmptyCurrency,

    /// Currency code is not three letters.
    #[error("Currency must be a 3-letter code: {code}")]
    InvalidCurrency { code: String },

    /// Stock is below zero.
    #[error("Stock cannot be negative: {value}")]
    NegativeStock { value: i64 },

    /// Stock is larger than the supported range.
    #[error("Stock is out of range: {value}")]
    StockOutOfRange { value: i64 },

    /// Stock addition overflowed the supported range.
    #[error("Stock addition overflowed: {current} + {amount}")]
    StockOverflow { current: u32, amount: u32 },

    /// Stock subtraction would go below zero.
    #[error("Cannot subtract more stock than available: {current} - {amount}")]
    StockUnderflow { current: u32, amount: u32 },
}

impl ValidationError {
    /// Returns the name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName | ValidationError::NameTooLong { .. } => "name",
            ValidationError::DescriptionTooLong { .. } => "description",
            ValidationError::NegativePrice { .. }
            | ValidationError::UnrepresentablePrice { .. }
            | ValidationError::PriceOverflow
            | ValidationError::PriceOutOfRange { .. } => "price",
            ValidationError::EmptyCurrency | ValidationError::InvalidCurrency { .. } => "currency",
            ValidationError::NegativeStock { .. }
            | ValidationError::StockOutOfRange { .. }
            | ValidationError::StockOverflow { .. }
            | ValidationError::StockUnderflow { .. } => "stock",
        }
    }
}

/// Errors raised by the product aggregate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    /// A field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not enough stock to satisfy a reduction.
    #[error("Insufficient stock. Available: {available}, Requested: {requested}")]
    InsufficientStock { available: u32, requested: u32 },

    /// Stored timestamps are out of order.
    #[error("Invalid timestamps: updated_at {updated_at} is before created_at {created_at}")]
    InvalidTimestamps {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}
