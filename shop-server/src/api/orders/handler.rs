//! Order API Handlers
//!
//! 订单接口沿用统一的失败格式：解析、校验或写入失败都返回
//! `400 {"message", "error"}`；不存在返回 404；非法状态流转返回 409。
//! 数据库错误的原文只写日志，不返回给客户端。

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{Order, OrderCreate, OrderStatusUpdate};
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::repository::{OrderRepository, RepoError};
use crate::utils::validation::{json_body, validated_body};
use crate::utils::{AppError, AppResult};

const CREATE_FAILED: &str = "Failed to create order.";
const UPDATE_FAILED: &str = "Failed to update order status.";

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// POST /orders - 创建订单 (初始状态 Pending)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let payload = validated_body(payload, CREATE_FAILED)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .create(payload)
        .await
        .map_err(|e| {
            tracing::error!(target: "database", error = %e, "Failed to store order");
            AppError::bad_request(CREATE_FAILED, "Database error")
        })?;

    tracing::info!(
        order_id = %order.id,
        customer = %order.customer_name,
        items = order.products.len(),
        total = order.total,
        "Order created"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// POST /orders/{id}/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderStatusUpdate>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let id = Uuid::parse_str(&id).map_err(|e| AppError::bad_request(UPDATE_FAILED, e))?;
    let OrderStatusUpdate { status } = json_body(payload, UPDATE_FAILED)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .update_status(id, status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::not_found("Order not found."),
            other => AppError::from(other),
        })?;

    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
    Ok(Json(order))
}
