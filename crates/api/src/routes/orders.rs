//! Order intake endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub product_id: String,
}

/// POST /api/v1/orders: accepts an order and announces it downstream.
///
/// Succeeds even when the notification could not be delivered.
#[tracing::instrument(skip(state, payload))]
pub async fn place(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Json(req) = payload?;
    let product_id = state.orders.place_order(req.product_id).await;
    Ok(Json(OrderResponse { product_id }))
}
