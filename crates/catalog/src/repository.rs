//! Storage port for product aggregates.

use async_trait::async_trait;
use common::{ProductId, Version};
use thiserror::Error;

use crate::product::Product;

/// Errors a repository backend can report.
///
/// Absence is never an error: lookups return `None`, `false` or `0`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The stored product moved past the version the caller expected.
    #[error(
        "Concurrency conflict for product {product_id}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        product_id: ProductId,
        expected: Version,
        actual: Version,
    },

    /// The storage backend failed.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Options for writing a product to a repository.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Version the stored product must currently be at.
    /// If None, the write overwrites whatever is stored.
    pub expected_version: Option<Version>,
}

impl SaveOptions {
    /// Creates options with no version check (last writer wins).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options expecting the stored product to be at `version`.
    pub fn expect_version(version: Version) -> Self {
        Self {
            expected_version: Some(version),
        }
    }

    /// Creates options expecting no product to be stored under the id yet.
    pub fn expect_new() -> Self {
        Self {
            expected_version: Some(Version::initial()),
        }
    }
}

/// Storage contract for products, independent of the backing technology.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts or overwrites a product by identity.
    ///
    /// The stored instance is returned with its version advanced by one.
    /// If `options.expected_version` is set and does not match the stored
    /// version, nothing is written and `ConcurrencyConflict` is returned.
    async fn save_with(&self, product: Product, options: SaveOptions) -> Result<Product>;

    /// Looks up a product by identity.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// Returns every stored product, in no particular order.
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Removes a product. Returns true if one was stored under the id.
    async fn delete_by_id(&self, id: ProductId) -> Result<bool>;

    /// Returns true if a product is stored under the id.
    async fn exists_by_id(&self, id: ProductId) -> Result<bool>;

    /// Returns the number of stored products.
    async fn count(&self) -> Result<usize>;
}

/// Extension trait providing convenience methods for repositories.
#[async_trait]
pub trait ProductRepositoryExt: ProductRepository {
    /// Upserts a product with no version check.
    async fn save(&self, product: Product) -> Result<Product> {
        self.save_with(product, SaveOptions::new()).await
    }
}

// Blanket implementation for all ProductRepository implementations
impl<T: ProductRepository + ?Sized> ProductRepositoryExt for T {}
