//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`ErrorBody`] - 错误响应体
//!
//! # 错误分级
//!
//! | 分类 | 状态码 | 响应体 |
//! |------|--------|--------|
//! | 资源不存在 | 404 | `{"message"}` |
//! | 请求格式错误 / 存储拒绝 | 400 | `{"message", "error"}` |
//! | 状态冲突 | 409 | `{"message"}` |
//! | 数据库 / 内部错误 | 500 | `{"message"}` (详情只写日志) |
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::not_found("Product not found."))
//! Err(AppError::bad_request("Failed to create order.", e))
//! ```

use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepoError;

/// 错误响应体
///
/// ```json
/// { "message": "Failed to create order.", "error": "quantity must be at least 1" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{message} {error}")]
    /// 请求格式错误或存储拒绝 (400)
    BadRequest { message: String, error: String },

    #[error("{0}")]
    /// 状态冲突 (409)
    Conflict(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>, error: impl Display) -> Self {
        Self::BadRequest {
            message: message.into(),
            error: error.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorBody {
        match self {
            AppError::NotFound(message) | AppError::Conflict(message) => ErrorBody {
                message,
                error: None,
            },
            AppError::BadRequest { message, error } => ErrorBody {
                message,
                error: Some(error),
            },
            // 记录内部错误但不暴露详细信息
            AppError::Database(detail) => {
                error!(target: "database", error = %detail, "Database error occurred");
                ErrorBody {
                    message: "Database error".into(),
                    error: None,
                }
            }
            AppError::Internal(detail) => {
                error!(target: "internal", error = %detail, "Internal error occurred");
                ErrorBody {
                    message: "Internal server error".into(),
                    error: None,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Duplicate(msg) => AppError::Internal(msg),
        }
    }
}
