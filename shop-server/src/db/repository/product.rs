//! Product Repository

use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductCreate};
use shared::util::snowflake_id;

use super::{BaseRepository, RepoError, RepoResult, is_duplicate_record};
use crate::db::{Database, PRODUCTS};

const PRODUCT_FIELDS: &str = "record::id(id) AS id, name, price, image, description";

/// Retries when another process already took the generated id
const MAX_CREATE_ATTEMPTS: usize = 3;

/// Stored document (the id lives in the record key)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    name: String,
    price: String,
    image: String,
    description: String,
}

impl From<&ProductCreate> for ProductDocument {
    fn from(data: &ProductCreate) -> Self {
        Self {
            name: data.name.clone(),
            price: data.price.clone(),
            image: data.image.clone(),
            description: data.description.clone(),
        }
    }
}

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(format!("SELECT {} FROM type::table($table)", PRODUCT_FIELDS))
            .bind(("table", PRODUCTS))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Create a new product under a fresh snowflake id
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        self.create_with_ids(data, snowflake_id).await
    }

    /// Create using ids drawn from `next_id`, one per attempt
    async fn create_with_ids(
        &self,
        data: ProductCreate,
        mut next_id: impl FnMut() -> i64,
    ) -> RepoResult<Product> {
        let doc = ProductDocument::from(&data);

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let id = next_id();
            let result = self
                .base
                .db()
                .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
                .bind(("table", PRODUCTS))
                .bind(("id", id))
                .bind(("data", doc.clone()))
                .await?
                .check();

            match result {
                Ok(_) => return Ok(Product::from_create(id, data)),
                Err(e) if is_duplicate_record(&e) => {
                    tracing::warn!(product_id = id, attempt, "Product id already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(RepoError::Duplicate(format!(
            "no free product id after {} attempts",
            MAX_CREATE_ATTEMPTS
        )))
    }

    /// Delete a product by id; returns false when nothing matched
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let deleted: Vec<ProductDocument> = self
            .base
            .db()
            .query("DELETE type::thing($table, $id) RETURN BEFORE")
            .bind(("table", PRODUCTS))
            .bind(("id", id))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}
