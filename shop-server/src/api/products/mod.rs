//! Product API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
}
