//! Setting Repository (one row per key)

use shared::models::{Setting, SettingKey};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::{Database, SETTINGS};

#[derive(Clone)]
pub struct SettingRepository {
    base: BaseRepository,
}

impl SettingRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All setting rows
    pub async fn find_all(&self) -> RepoResult<Vec<Setting>> {
        let rows: Vec<Setting> = self
            .base
            .db()
            .query("SELECT key, value FROM type::table($table)")
            .bind(("table", SETTINGS))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Insert or overwrite the row for `key`
    ///
    /// The key doubles as the record key, so repeated upserts never create
    /// a second row.
    pub async fn upsert(&self, key: SettingKey, value: String) -> RepoResult<Setting> {
        let updated: Option<Setting> = self
            .base
            .db()
            .query("UPSERT type::thing($table, $key) SET key = $key, value = $value RETURN AFTER")
            .bind(("table", SETTINGS))
            .bind(("key", key))
            .bind(("value", value))
            .await?
            .take(0)?;
        updated.ok_or_else(|| RepoError::Database(format!("Failed to upsert setting {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::db::DbService;

    async fn repo() -> SettingRepository {
        let service = DbService::connect(&DatabaseConfig::default()).await.unwrap();
        SettingRepository::new(service.db)
    }

    #[tokio::test]
    async fn upsert_overwrites_instead_of_duplicating() {
        let repo = repo().await;
        repo.upsert(SettingKey::ShopLogo, "http://x/a.png".into()).await.unwrap();
        let row = repo
            .upsert(SettingKey::ShopLogo, "http://x/b.png".into())
            .await
            .unwrap();
        assert_eq!(row.value, "http://x/b.png");

        let rows = repo.find_all().await.unwrap();
        assert_eq!(
            rows,
            vec![Setting {
                key: SettingKey::ShopLogo,
                value: "http://x/b.png".into(),
            }]
        );
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let repo = repo().await;
        repo.upsert(SettingKey::ShopName, "Corner Shop".into()).await.unwrap();
        repo.upsert(SettingKey::ShopLogo, "logo".into()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
