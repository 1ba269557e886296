//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
///
/// `price` is display text (e.g. "9.99"); the server never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Snowflake id, also the record key in the `products` collection
    pub id: i64,
    pub name: String,
    pub price: String,
    /// URL or data URI
    pub image: String,
    pub description: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn from_create(id: i64, data: ProductCreate) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
            image: data.image,
            description: data.description,
        }
    }
}

/// Plain `{message}` reply used by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
