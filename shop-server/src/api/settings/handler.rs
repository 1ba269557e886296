//! Shop Settings API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::models::{LogoUpdate, NameUpdate, Setting, SettingKey, SettingsMap, fold_settings};

use crate::core::ServerState;
use crate::db::repository::SettingRepository;
use crate::utils::AppResult;
use crate::utils::validation::json_body;

/// Get all settings as a `{key: value}` map
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<SettingsMap>> {
    let repo = SettingRepository::new(state.db.clone());
    let rows = repo.find_all().await?;
    Ok(Json(fold_settings(rows)))
}

/// Set the shop logo URL
pub async fn update_logo(
    State(state): State<ServerState>,
    payload: Result<Json<LogoUpdate>, JsonRejection>,
) -> AppResult<Json<Setting>> {
    let payload = json_body(payload, "Invalid logo payload.")?;
    let repo = SettingRepository::new(state.db.clone());
    let setting = repo.upsert(SettingKey::ShopLogo, payload.logo_url).await?;

    tracing::info!(key = %setting.key, "Shop setting updated");
    Ok(Json(setting))
}

/// Set the shop name
pub async fn update_name(
    State(state): State<ServerState>,
    payload: Result<Json<NameUpdate>, JsonRejection>,
) -> AppResult<Json<Setting>> {
    let payload = json_body(payload, "Invalid name payload.")?;
    let repo = SettingRepository::new(state.db.clone());
    let setting = repo.upsert(SettingKey::ShopName, payload.name).await?;

    tracing::info!(key = %setting.key, value = %setting.value, "Shop setting updated");
    Ok(Json(setting))
}
