//! Catalog service orchestrating product use cases.

use common::ProductId;

use crate::error::DomainError;
use crate::repository::{ProductRepository, SaveOptions};

use super::{CreateProduct, Product, ProductError, ProductListView, ProductView, UpdateProduct};

/// Service for managing the product catalog.
///
/// Owns its repository, which is handed in at construction. Each use case
/// validates input into value objects, loads or creates the aggregate, lets
/// the aggregate enforce its rules, persists the result and returns a view.
///
/// Writes to an existing product are conditional on the version it was
/// loaded at, so a concurrent update between the load and the save fails
/// with a concurrency conflict instead of being silently overwritten.
pub struct CatalogService<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Creates a new catalog service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates a new product.
    #[tracing::instrument(skip(self, cmd), fields(name = %cmd.name))]
    pub async fn create_product(&self, cmd: CreateProduct) -> Result<ProductView, DomainError> {
        let fields = cmd.validate()?;
        let product = Product::create(
            fields.name,
            fields.description,
            fields.price,
            fields.currency,
            fields.stock,
        );

        let saved = self
            .repository
            .save_with(product, SaveOptions::expect_new())
            .await?;

        metrics::counter!("catalog_products_created_total").increment(1);
        tracing::info!(product_id = %saved.id(), "product created");

        Ok(ProductView::from(&saved))
    }

    /// Loads a product by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<ProductView, DomainError> {
        let product = self.load(product_id).await?;
        Ok(ProductView::from(&product))
    }

    /// Lists every product with availability counts.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<ProductListView, DomainError> {
        let products = self.repository.find_all().await?;
        let views = products.iter().map(ProductView::from).collect();
        Ok(ProductListView::from_products(views))
    }

    /// Replaces every editable field of a product, including its stock.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn update_product(
        &self,
        product_id: ProductId,
        cmd: UpdateProduct,
    ) -> Result<ProductView, DomainError> {
        let mut product = self.load(product_id).await?;
        let fields = cmd.validate()?;

        product.update_info(fields.name, fields.description, fields.price, fields.currency);
        product.update_stock(fields.stock);

        let saved = self.store(product).await?;
        tracing::info!(%product_id, version = %saved.version(), "product updated");

        Ok(ProductView::from(&saved))
    }

    /// Deletes a product.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, product_id: ProductId) -> Result<(), DomainError> {
        if !self.repository.delete_by_id(product_id).await? {
            return Err(DomainError::ProductNotFound(product_id));
        }

        metrics::counter!("catalog_products_deleted_total").increment(1);
        tracing::info!(%product_id, "product deleted");
        Ok(())
    }

    /// Adds units to a product's stock.
    #[tracing::instrument(skip(self))]
    pub async fn add_stock(
        &self,
        product_id: ProductId,
        amount: u32,
    ) -> Result<ProductView, DomainError> {
        let mut product = self.load(product_id).await?;
        product.add_stock(amount)?;

        let saved = self.store(product).await?;
        Ok(ProductView::from(&saved))
    }

    /// Removes units from a product's stock.
    ///
    /// Fails with an insufficient-stock error, writing nothing, if fewer
    /// than `amount` units are on hand.
    #[tracing::instrument(skip(self))]
    pub async fn reduce_stock(
        &self,
        product_id: ProductId,
        amount: u32,
    ) -> Result<ProductView, DomainError> {
        let mut product = self.load(product_id).await?;

        if let Err(e) = product.reduce_stock(amount) {
            if let ProductError::InsufficientStock { available, .. } = e {
                metrics::counter!("catalog_stock_rejections_total").increment(1);
                tracing::warn!(%product_id, available, requested = amount, "stock reduction rejected");
            }
            return Err(e.into());
        }

        let saved = self.store(product).await?;
        Ok(ProductView::from(&saved))
    }

    /// Returns true if a product is stored under the id.
    pub async fn product_exists(&self, product_id: ProductId) -> Result<bool, DomainError> {
        Ok(self.repository.exists_by_id(product_id).await?)
    }

    /// Returns the number of products in the catalog.
    pub async fn product_count(&self) -> Result<usize, DomainError> {
        Ok(self.repository.count().await?)
    }

    async fn load(&self, product_id: ProductId) -> Result<Product, DomainError> {
        self.repository
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::ProductNotFound(product_id))
    }

    async fn store(&self, product: Product) -> Result<Product, DomainError> {
        let expected = product.version();
        Ok(self
            .repository
            .save_with(product, SaveOptions::expect_version(expected))
            .await?)
    }
}
