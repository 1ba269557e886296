//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 数据库可达即 200，否则 503 (错误详情只写日志) |
//!
//! # 响应示例
//!
//! ```json
//! { "status": "ok", "version": "0.1.0" }
//! ```

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::DbService;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// 基础健康检查: 对数据库执行一条简单查询
pub async fn health(State(state): State<ServerState>) -> Response {
    match DbService::ping(&state.db).await {
        Ok(()) => Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            message: None,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(target: "database", error = %e, "Health check failed: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "error",
                    version: env!("CARGO_PKG_VERSION"),
                    message: Some("Database unavailable".into()),
                }),
            )
                .into_response()
        }
    }
}
