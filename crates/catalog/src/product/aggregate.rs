//! Product aggregate implementation.

use chrono::{DateTime, Utc};
use common::{ProductId, Version};
use rust_decimal::Decimal;

use super::{Currency, Description, Price, ProductError, ProductName, Stock, ValidationError};

/// Product aggregate root.
///
/// Identity is fixed at creation. All other fields change only through the
/// methods below, each of which bumps `updated_at`. Two products are equal
/// when their identifiers are equal, whatever their other fields hold.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: Description,
    price: Price,
    currency: Currency,
    stock: Stock,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    /// Storage revision, advanced by the repository on every write.
    version: Version,
}

/// Raw, unvalidated product fields as held by a storage backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: Version,
}

impl Product {
    /// Creates a new product with a fresh identity.
    ///
    /// Both timestamps are set to the current time.
    pub fn create(
        name: ProductName,
        description: Description,
        price: Price,
        currency: Currency,
        stock: Stock,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            name,
            description,
            price,
            currency,
            stock,
            created_at: now,
            updated_at: now,
            version: Version::initial(),
        }
    }

    /// Rebuilds a product from a stored record.
    ///
    /// Every field goes through the same validation as on creation, and the
    /// record is rejected if `updated_at` is earlier than `created_at`.
    pub fn reconstruct(record: ProductRecord) -> Result<Self, ProductError> {
        if record.updated_at < record.created_at {
            return Err(ProductError::InvalidTimestamps {
                created_at: record.created_at,
                updated_at: record.updated_at,
            });
        }

        Ok(Self {
            id: record.id,
            name: ProductName::new(&record.name)?,
            description: Description::new(&record.description)?,
            price: Price::new(record.price)?,
            currency: Currency::new(&record.currency)?,
            stock: Stock::new(record.stock)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
            version: record.version,
        })
    }

    /// Returns the product as a raw record for storage.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: self.price.amount(),
            currency: self.currency.to_string(),
            stock: i64::from(self.stock.value()),
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
        }
    }

    pub(crate) fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    fn touch(&mut self) {
        // never move backwards if the wall clock does
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

// Query methods
impl Product {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the storage revision this instance was loaded at.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns true if at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.stock.is_available()
    }

    /// Returns true if nothing is in stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock.is_zero()
    }

    /// Returns the price prefixed with the currency symbol, e.g. `$20.00`.
    pub fn formatted_price(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.price)
    }

    /// Returns the value of the stock on hand (price times quantity).
    pub fn inventory_value(&self) -> Result<Price, ValidationError> {
        self.price.multiply(Decimal::from(self.stock.value()))
    }
}

// Mutations
impl Product {
    /// Replaces name, description, price and currency together.
    ///
    /// Stock is left untouched.
    pub fn update_info(
        &mut self,
        name: ProductName,
        description: Description,
        price: Price,
        currency: Currency,
    ) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.currency = currency;
        self.touch();
    }

    /// Replaces the stock level.
    pub fn update_stock(&mut self, stock: Stock) {
        self.stock = stock;
        self.touch();
    }

    /// Increases the stock level by `amount`.
    pub fn add_stock(&mut self, amount: u32) -> Result<(), ProductError> {
        self.stock = self.stock.add(amount)?;
        self.touch();
        Ok(())
    }

    /// Decreases the stock level by `amount`.
    ///
    /// Fails with [`ProductError::InsufficientStock`] and leaves the product
    /// unchanged if fewer than `amount` units are on hand.
    pub fn reduce_stock(&mut self, amount: u32) -> Result<(), ProductError> {
        if !self.stock.has_enough(amount) {
            return Err(ProductError::InsufficientStock {
                available: self.stock.value(),
                requested: amount,
            });
        }

        self.stock = self.stock.subtract(amount)?;
        self.touch();
        Ok(())
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl std::hash::Hash for Product {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Product {{ id: {}, name: {}, price: {}, currency: {}, stock: {} }}",
            self.id, self.name, self.price, self.currency, self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use chrono::Duration;

    use super::*;

    fn widget(stock: i64) -> Product {
        Product::create(
            ProductName::new("Widget").unwrap(),
            Description::new("A useful widget").unwrap(),
            Price::new(Decimal::from_str("19.99").unwrap()).unwrap(),
            Currency::usd(),
            Stock::new(stock).unwrap(),
        )
    }

    #[test]
    fn test_create_stamps_equal_timestamps() {
        let product = widget(5);
        assert_eq!(product.created_at(), product.updated_at());
        assert_eq!(product.version(), Version::initial());
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        assert_ne!(widget(1).id(), widget(1).id());
    }

    #[test]
    fn test_update_info_replaces_fields_and_keeps_stock() {
        let mut product = widget(5);
        let created_at = product.created_at();

        product.update_info(
            ProductName::new("Gadget").unwrap(),
            Description::empty(),
            Price::from_units(3).unwrap(),
            Currency::eur(),
        );

        assert_eq!(product.name().as_str(), "Gadget");
        assert!(product.description().is_empty());
        assert_eq!(product.price().to_string(), "3.00");
        assert_eq!(product.currency(), &Currency::eur());
        assert_eq!(product.stock().value(), 5);
        assert_eq!(product.created_at(), created_at);
        assert!(product.updated_at() >= created_at);
    }

    #[test]
    fn test_update_stock_replaces_quantity() {
        let mut product = widget(5);
        product.update_stock(Stock::zero());
        assert!(product.is_out_of_stock());
        assert!(!product.is_available());
    }

    #[test]
    fn test_reduce_stock_insufficient_leaves_product_unchanged() {
        let mut product = widget(3);
        let updated_at = product.updated_at();

        let err = product.reduce_stock(4).unwrap_err();

        assert_eq!(
            err,
            ProductError::InsufficientStock {
                available: 3,
                requested: 4
            }
        );
        assert_eq!(err.to_string(), "Insufficient stock. Available: 3, Requested: 4");
        assert_eq!(product.stock().value(), 3);
        assert_eq!(product.updated_at(), updated_at);
    }

    #[test]
    fn test_reduce_stock_to_zero() {
        let mut product = widget(3);
        product.reduce_stock(3).unwrap();
        assert!(product.is_out_of_stock());
    }

    #[test]
    fn test_add_stock_overflow_is_validation_error() {
        let mut product = widget(1);
        product.update_stock(Stock::from_quantity(u32::MAX));
        assert!(matches!(
            product.add_stock(1),
            Err(ProductError::Validation(ValidationError::StockOverflow { .. }))
        ));
        assert_eq!(product.stock().value(), u32::MAX);
    }

    #[test]
    fn test_formatted_price_uses_symbol() {
        let mut product = widget(1);
        assert_eq!(product.formatted_price(), "$19.99");

        product.update_info(
            product.name().clone(),
            product.description().clone(),
            Price::from_units(7).unwrap(),
            Currency::new("gbp").unwrap(),
        );
        assert_eq!(product.formatted_price(), "GBP7.00");
    }

    #[test]
    fn test_inventory_value() {
        let product = widget(3);
        assert_eq!(product.inventory_value().unwrap().to_string(), "59.97");
        assert!(widget(0).inventory_value().unwrap().is_zero());
    }

    #[test]
    fn test_equality_is_by_identity() {
        let product = widget(1);
        let mut changed = product.clone();
        changed.update_stock(Stock::new(99).unwrap());

        assert_eq!(product, changed);
        assert_ne!(product, widget(1));

        let set: HashSet<Product> = [product, changed].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_record_roundtrip_preserves_fields() {
        let product = widget(4);
        let restored = Product::reconstruct(product.to_record()).unwrap();

        assert_eq!(restored.to_record(), product.to_record());
    }

    #[test]
    fn test_reconstruct_validates_fields() {
        let mut record = widget(4).to_record();
        record.currency = "DOLLARS".to_string();

        assert!(matches!(
            Product::reconstruct(record),
            Err(ProductError::Validation(ValidationError::InvalidCurrency { .. }))
        ));
    }

    #[test]
    fn test_reconstruct_rejects_out_of_order_timestamps() {
        let mut record = widget(4).to_record();
        record.updated_at = record.created_at - Duration::seconds(1);

        assert!(matches!(
            Product::reconstruct(record),
            Err(ProductError::InvalidTimestamps { .. })
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: reducing by one more than is on hand always fails and changes nothing.
            #[test]
            fn reduce_beyond_stock_is_rejected(stock in 0i64..100_000) {
                let mut product = widget(stock);
                let before = product.to_record();

                let result = product.reduce_stock(product.stock().value() + 1);

                prop_assert!(
                    matches!(result, Err(ProductError::InsufficientStock { .. })),
                    "expected insufficient stock"
                );
                prop_assert_eq!(product.to_record(), before);
            }

            /// Property: add then reduce by the same amount restores the stock level.
            #[test]
            fn add_then_reduce_restores_stock(stock in 0i64..100_000, amount in 0u32..100_000) {
                let mut product = widget(stock);
                let updated_at = product.updated_at();

                product.add_stock(amount).unwrap();
                product.reduce_stock(amount).unwrap();

                prop_assert_eq!(i64::from(product.stock().value()), stock);
                prop_assert!(product.updated_at() >= updated_at);
                prop_assert!(product.updated_at() >= product.created_at());
            }

            /// Property: availability flags are mutually exclusive and exhaustive.
            #[test]
            fn availability_flags_partition(stock in 0i64..10) {
                let product = widget(stock);
                prop_assert_ne!(product.is_available(), product.is_out_of_stock());
            }
        }
    }
}
