//! Shop Setting Model
//!
//! 店铺级设置 (logo / 名称)，每个 key 最多一条记录

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Known setting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    ShopLogo,
    ShopName,
}

impl SettingKey {
    /// Key as stored and sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::ShopLogo => "shopLogo",
            SettingKey::ShopName => "shopName",
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One setting row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: SettingKey,
    pub value: String,
}

/// All settings folded into `{key: value}`
pub type SettingsMap = BTreeMap<SettingKey, String>;

/// Fold setting rows into a map; a later row for the same key wins
pub fn fold_settings(rows: impl IntoIterator<Item = Setting>) -> SettingsMap {
    rows.into_iter().map(|s| (s.key, s.value)).collect()
}

/// POST /settings/logo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LogoUpdate {
    pub logo_url: String,
}

/// POST /settings/name payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameUpdate {
    pub name: String,
}
