use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{ProductId, Version};
use tokio::sync::RwLock;

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError, Result, SaveOptions};

/// In-memory product repository.
///
/// Products live in a map keyed by identity for as long as the process runs.
/// Clones share the same map, so one instance can be handed to several
/// services. Each call takes the lock once, making single operations atomic;
/// a load followed by a save is two calls and is not.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Removes all products.
    pub async fn clear(&self) {
        self.products.write().await.clear();
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save_with(&self, mut product: Product, options: SaveOptions) -> Result<Product> {
        let product_id = product.id();
        let mut store = self.products.write().await;

        let current_version = store
            .get(&product_id)
            .map(Product::version)
            .unwrap_or(Version::initial());

        if let Some(expected) = options.expected_version
            && current_version != expected
        {
            return Err(RepositoryError::ConcurrencyConflict {
                product_id,
                expected,
                actual: current_version,
            });
        }

        product.set_version(current_version.next());
        store.insert(product_id, product.clone());

        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let store = self.products.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let store = self.products.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<bool> {
        let mut store = self.products.write().await;
        Ok(store.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool> {
        let store = self.products.read().await;
        Ok(store.contains_key(&id))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.products.read().await.len())
    }
}
