//! Product catalog domain.
//!
//! This crate holds the product aggregate and its value objects, the
//! repository port with an in-memory adapter, and the [`CatalogService`]
//! that runs the create, read, update, delete and stock use cases.
//!
//! # Example
//!
//! ```no_run
//! use catalog::{CatalogService, CreateProduct, InMemoryProductRepository};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> Result<(), catalog::DomainError> {
//! let service = CatalogService::new(InMemoryProductRepository::new());
//! let view = service
//!     .create_product(CreateProduct::new("Widget", "", Decimal::new(1999, 2), "USD", 5))
//!     .await?;
//! assert_eq!(view.formatted_price, "$19.99");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod product;
pub mod repository;

pub use error::DomainError;
pub use memory::InMemoryProductRepository;
pub use product::{
    CatalogService, CreateProduct, Currency, Description, Price, Product, ProductError,
    ProductListView, ProductName, ProductRecord, ProductView, Stock, UpdateProduct,
    ValidationError,
};
pub use repository::{ProductRepository, ProductRepositoryExt, RepositoryError, SaveOptions};
