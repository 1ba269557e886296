//! 集成测试公共工具: 内存数据库 + 完整中间件栈, 通过 oneshot 发请求

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use shop_server::{Config, ServerState, routes};
use tower::ServiceExt;

/// Build the app on a fresh in-memory database
pub async fn app() -> Router {
    app_with(Config::for_tests()).await
}

pub async fn app_with(config: Config) -> Router {
    let state = ServerState::initialize(&config)
        .await
        .expect("in-memory database");
    routes::build_app(&state).with_state(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// A valid order body with one line item
pub fn order_body() -> Value {
    serde_json::json!({
        "customerName": "Asha",
        "phoneNumber": "9876543210",
        "address": "12 Lake Road",
        "paymentMethod": "UPI",
        "upiScreenshot": "data:image/png;base64,iVBORw0KGgo=",
        "products": [
            {"id": 1, "name": "Mug", "price": "9.99", "quantity": 2}
        ],
        "total": 19.98
    })
}
