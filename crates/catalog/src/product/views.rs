//! Read-side projections of the product aggregate.

use chrono::{DateTime, Utc};
use common::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Product as returned to callers, with derived display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub currency_symbol: String,
    pub stock: u32,
    pub formatted_price: String,
    pub available: bool,
    pub out_of_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price().amount(),
            currency: product.currency().to_string(),
            currency_symbol: product.currency().symbol().to_string(),
            stock: product.stock().value(),
            formatted_price: product.formatted_price(),
            available: product.is_available(),
            out_of_stock: product.is_out_of_stock(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }
}

/// Full catalog listing with summary counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListView {
    pub products: Vec<ProductView>,
    pub total_count: usize,
    pub available_count: usize,
    pub out_of_stock_count: usize,
}

impl ProductListView {
    /// Builds a listing, counting availability across all entries.
    pub fn from_products(products: Vec<ProductView>) -> Self {
        let total_count = products.len();
        let available_count = products.iter().filter(|p| p.available).count();

        Self {
            products,
            total_count,
            available_count,
            out_of_stock_count: total_count - available_count,
        }
    }
}
