//! 请求访问日志
//!
//! 每个请求结束后记一条访问日志。请求开始与 span 由 `TraceLayer` 负责，
//! 这里只补上业务侧关心的字段：请求 ID、路由模板、结果分类和耗时。

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_http::request_id::RequestId;

/// 响应结果分类 (写入日志的 `outcome` 字段)
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "rejected"
    } else {
        "ok"
    }
}

/// 访问日志中间件
///
/// 路径取路由模板 (`/orders/{id}/status`)，避免把订单 ID 散落在日志维度里；
/// 未命中路由时退回原始路径。5xx 用 warn，其余用 info。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    let outcome = outcome(status);

    if status.is_server_error() {
        tracing::warn!(%request_id, %method, %route, status = status.as_u16(), outcome, latency_ms, "request finished");
    } else {
        tracing::info!(%request_id, %method, %route, status = status.as_u16(), outcome, latency_ms, "request finished");
    }

    response
}
