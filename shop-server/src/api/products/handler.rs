//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{MessageResponse, Product, ProductCreate};

use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::utils::validation::validated_body;
use crate::utils::{AppError, AppResult};

const INVALID_PAYLOAD: &str = "Invalid product payload.";

// =============================================================================
// Product Handlers
// =============================================================================

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// POST /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let payload = validated_body(payload, INVALID_PAYLOAD)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /products/{id} - 删除商品 (按数值 id 精确匹配)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: i64 = id
        .parse()
        .map_err(|e| AppError::bad_request("Invalid product id.", e))?;

    let repo = ProductRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found("Product not found."));
    }

    tracing::info!(product_id = id, "Product deleted");
    Ok(Json(MessageResponse::new("Product deleted successfully.")))
}
