//! Request body helpers
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so a malformed body turns
//! into a 400 carrying the endpoint's own message instead of axum's default
//! plain-text rejection.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use crate::utils::{AppError, AppResult};

/// Unwrap a JSON body, mapping rejections (bad syntax, missing or unknown
/// fields, wrong content type) to `400 {message, error}`.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::bad_request(message, rejection.body_text()))
}

/// Same as [`json_body`], then run the payload's `validator` rules.
pub fn validated_body<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> AppResult<T> {
    let value = json_body(payload, message)?;
    value
        .validate()
        .map_err(|errors| AppError::bad_request(message, errors))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductCreate;

    #[test]
    fn validation_failures_become_bad_requests() {
        let payload = Ok(Json(ProductCreate {
            name: String::new(),
            price: "1".into(),
            image: String::new(),
            description: String::new(),
        }));
        let err = validated_body(payload, "Invalid product.").unwrap_err();
        match err {
            AppError::BadRequest { message, error } => {
                assert_eq!(message, "Invalid product.");
                assert!(error.contains("name must not be empty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes_through() {
        let payload = Ok(Json(ProductCreate {
            name: "Mug".into(),
            price: "1".into(),
            image: String::new(),
            description: String::new(),
        }));
        let product = validated_body(payload, "Invalid product.").unwrap();
        assert_eq!(product.name, "Mug");
    }
}
