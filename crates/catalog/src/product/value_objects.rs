//! Value objects for the product domain.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum number of characters in a product name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum number of characters in a product description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Name of a product. Trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Creates a product name, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong {
                length,
                max: MAX_NAME_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

/// Free-text description of a product.
///
/// An empty description is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Creates a description, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        let length = trimmed.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::DescriptionTooLong {
                length,
                max: MAX_DESCRIPTION_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the empty description.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the description has no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

/// Non-negative price held at exactly two decimal places.
///
/// Every constructor and arithmetic operation rounds half-up to two places
/// and rejects negative results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Number of fractional digits kept.
    pub const SCALE: u32 = 2;

    /// Creates a price from a decimal amount.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativePrice { value });
        }

        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        // rescale keeps a smaller scale when the integer part leaves no room
        if rounded.scale() != Self::SCALE {
            return Err(ValidationError::PriceOutOfRange { value });
        }
        // -0.00 displays with a sign
        rounded.set_sign_positive(true);
        Ok(Self(rounded))
    }

    /// Creates a price from a floating point amount.
    ///
    /// The shortest decimal representation of the float is used, so `9.995`
    /// is treated as exactly `9.995` and rounds to `10.00`.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::UnrepresentablePrice {
                input: value.to_string(),
            });
        }

        let text = value.to_string();
        let decimal = Decimal::from_str(&text)
            .map_err(|_| ValidationError::UnrepresentablePrice { input: text })?;
        Self::new(decimal)
    }

    /// Creates a price from a whole number of currency units.
    pub fn from_units(units: i64) -> Result<Self, ValidationError> {
        Self::new(Decimal::from(units))
    }

    /// Returns a zero price.
    pub fn zero() -> Self {
        Self(Decimal::new(0, Self::SCALE))
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the price is above zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds another price.
    pub fn add(&self, other: Price) -> Result<Price, ValidationError> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(ValidationError::PriceOverflow)?;
        Price::new(sum)
    }

    /// Subtracts another price. Fails if the result would be negative.
    pub fn subtract(&self, other: Price) -> Result<Price, ValidationError> {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or(ValidationError::PriceOverflow)?;
        Price::new(difference)
    }

    /// Multiplies by a scalar factor. Fails if the result would be negative.
    pub fn multiply(&self, factor: Decimal) -> Result<Price, ValidationError> {
        let product = self
            .0
            .checked_mul(factor)
            .ok_or(ValidationError::PriceOverflow)?;
        Price::new(product)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Three-letter currency code, stored uppercase.
///
/// Codes are shape-checked only; they are not matched against ISO-4217.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from a code, trimming and uppercasing it.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = code.as_ref().trim();
        if raw.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }

        let normalized = raw.to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency {
                code: raw.to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Euro.
    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    /// Turkish lira.
    pub fn try_lira() -> Self {
        Self("TRY".to_string())
    }

    /// Returns the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Returns the display symbol, or the code itself for unknown currencies.
    pub fn symbol(&self) -> &str {
        match self.0.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "TRY" => "₺",
            other => other,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// Quantity of a product on hand.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct Stock(u32);

impl Stock {
    /// Creates a stock level from a signed quantity.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::NegativeStock { value });
        }

        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::StockOutOfRange { value })
    }

    /// Creates a stock level from an unsigned quantity.
    pub fn from_quantity(quantity: u32) -> Self {
        Self(quantity)
    }

    /// Returns an empty stock level.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the quantity.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if nothing is on hand.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if at least one unit is on hand.
    pub fn is_available(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if at least `required` units are on hand.
    pub fn has_enough(&self, required: u32) -> bool {
        self.0 >= required
    }

    /// Returns a new stock level increased by `amount`.
    pub fn add(&self, amount: u32) -> Result<Stock, ValidationError> {
        self.0
            .checked_add(amount)
            .map(Stock)
            .ok_or(ValidationError::StockOverflow {
                current: self.0,
                amount,
            })
    }

    /// Returns a new stock level decreased by `amount`.
    pub fn subtract(&self, amount: u32) -> Result<Stock, ValidationError> {
        self.0
            .checked_sub(amount)
            .map(Stock)
            .ok_or(ValidationError::StockUnderflow {
                current: self.0,
                amount,
            })
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Stock {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stock> for u32 {
    fn from(stock: Stock) -> Self {
        stock.0
    }
}
