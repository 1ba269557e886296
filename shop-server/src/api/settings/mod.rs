//! Shop Settings API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Settings router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route("/logo", post(handler::update_logo))
        .route("/name", post(handler::update_name))
}
