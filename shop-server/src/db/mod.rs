//! Database Module
//!
//! Handles the SurrealDB connection. The URL scheme picks the engine:
//! `ws://` / `wss://` / `http://` reach a SurrealDB server, `mem://` runs an
//! in-process store (development and tests).

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::config::DatabaseConfig;

/// Shared database handle (cheap to clone, one connection per process)
pub type Database = Surreal<Any>;

/// Collection names
pub const PRODUCTS: &str = "products";
pub const SETTINGS: &str = "settings";
pub const ORDERS: &str = "orders";

/// Database service — owns the SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    pub db: Database,
}

impl DbService {
    /// Open the connection, sign in (when credentials are configured) and
    /// select namespace/database
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, surrealdb::Error> {
        let db = any::connect(config.url.as_str()).await?;

        if let Some((username, password)) = config.credentials() {
            db.signin(Root { username, password }).await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        if config.is_in_memory() {
            tracing::warn!("Using in-memory database, data will be lost on shutdown");
        }
        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self { db })
    }

    /// Round-trip a trivial query (used by the health check)
    pub async fn ping(db: &Database) -> Result<(), surrealdb::Error> {
        db.query("RETURN true").await?.check()?;
        Ok(())
    }
}
