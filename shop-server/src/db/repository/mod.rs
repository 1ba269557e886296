//! Repository Module
//!
//! Provides CRUD operations for the shop collections.

pub mod order;
pub mod product;
pub mod setting;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use setting::SettingRepository;

use thiserror::Error;

use super::Database;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 业务 ID 直接作为 record key：
//   - products:<snowflake i64>
//   - settings:<shopLogo|shopName>
//   - orders:<uuid string>
//
// 查询统一用 type::thing($table, $id) 定位记录，
// 返回时用 record::id(id) AS id 取出纯 key。

/// Whether a store error is a "record already exists" rejection
pub(crate) fn is_duplicate_record(err: &surrealdb::Error) -> bool {
    err.to_string().contains("already exists")
}

/// Whether a store error is an optimistic transaction conflict
///
/// SurrealDB aborts the later of two overlapping writes to the same record
/// with a retryable error instead of running it.
pub(crate) fn is_write_conflict(err: &surrealdb::Error) -> bool {
    is_write_conflict_message(&err.to_string())
}

fn is_write_conflict_message(message: &str) -> bool {
    message.contains("read or write conflict") || message.contains("can be retried")
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Database,
}

impl BaseRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_commit_failures_are_write_conflicts() {
        assert!(is_write_conflict_message(
            "Database error: The query was not executed due to a failed transaction. \
             Failed to commit transaction due to a read or write conflict. \
             This transaction can be retried"
        ));
        assert!(!is_write_conflict_message(
            "Database record `orders:abc` already exists"
        ));
    }
}
