//! Product commands.

use rust_decimal::Decimal;

use super::{Currency, Description, Price, ProductName, Stock, ValidationError};

/// Command to create a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub stock: i64,
}

impl CreateProduct {
    /// Creates a new CreateProduct command.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        currency: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            currency: currency.into(),
            stock,
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidatedFields, ValidationError> {
        ValidatedFields::build(
            &self.name,
            &self.description,
            self.price,
            &self.currency,
            self.stock,
        )
    }
}

/// Command to replace every editable field of an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub stock: i64,
}

impl UpdateProduct {
    /// Creates a new UpdateProduct command.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        currency: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            currency: currency.into(),
            stock,
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidatedFields, ValidationError> {
        ValidatedFields::build(
            &self.name,
            &self.description,
            self.price,
            &self.currency,
            self.stock,
        )
    }
}

/// Value objects built from a command, all validated.
#[derive(Debug)]
pub(crate) struct ValidatedFields {
    pub name: ProductName,
    pub description: Description,
    pub price: Price,
    pub currency: Currency,
    pub stock: Stock,
}

impl ValidatedFields {
    fn build(
        name: &str,
        description: &str,
        price: Decimal,
        currency: &str,
        stock: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ProductName::new(name)?,
            description: Description::new(description)?,
            price: Price::new(price)?,
            currency: Currency::new(currency)?,
            stock: Stock::new(stock)?,
        })
    }
}
