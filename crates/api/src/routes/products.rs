//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::{CreateProduct, ProductListView, ProductView, UpdateProduct};
use common::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

// -- Request types --

/// Body of create and update requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    /// Required; an empty string is a valid, explicitly blank description.
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub stock: i64,
}

#[derive(Debug, Deserialize)]
pub struct StockRequest {
    pub amount: u32,
}

// -- Response types --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    #[serde(flatten)]
    pub listing: ProductListView,
    pub message: String,
}

impl From<ProductListView> for ProductListResponse {
    fn from(listing: ProductListView) -> Self {
        let message = format!(
            "Found {} products ({} available, {} out of stock)",
            listing.total_count, listing.available_count, listing.out_of_stock_count
        );
        Self { listing, message }
    }
}

// -- Handlers --

/// GET /api/v1/products
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let listing = state.catalog.get_all_products().await?;
    Ok(Json(listing.into()))
}

/// GET /api/v1/products/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>, ApiError> {
    let product_id = parse_product_id(&id)?;
    Ok(Json(state.catalog.get_product(product_id).await?))
}

/// POST /api/v1/products
#[tracing::instrument(skip(state, payload))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductView>), ApiError> {
    let Json(req) = payload?;
    let cmd = CreateProduct::new(
        req.name,
        req.description,
        req.price,
        req.currency,
        req.stock,
    );

    let view = state.catalog.create_product(cmd).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /api/v1/products/{id}
#[tracing::instrument(skip(state, payload))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let product_id = parse_product_id(&id)?;
    let Json(req) = payload?;
    let cmd = UpdateProduct::new(
        req.name,
        req.description,
        req.price,
        req.currency,
        req.stock,
    );

    Ok(Json(state.catalog.update_product(product_id, cmd).await?))
}

/// DELETE /api/v1/products/{id}
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let product_id = parse_product_id(&id)?;
    state.catalog.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/products/{id}/stock/add
#[tracing::instrument(skip(state, payload))]
pub async fn add_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let product_id = parse_product_id(&id)?;
    let Json(req) = payload?;
    Ok(Json(state.catalog.add_stock(product_id, req.amount).await?))
}

/// POST /api/v1/products/{id}/stock/reduce
#[tracing::instrument(skip(state, payload))]
pub async fn reduce_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<ProductView>, ApiError> {
    let product_id = parse_product_id(&id)?;
    let Json(req) = payload?;
    Ok(Json(state.catalog.reduce_stock(product_id, req.amount).await?))
}

fn parse_product_id(id: &str) -> Result<ProductId, ApiError> {
    id.parse::<ProductId>()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))
}
