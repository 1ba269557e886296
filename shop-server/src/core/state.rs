use crate::core::{Config, Result};
use crate::db::{Database, DbService};

/// 服务器状态 - 持有所有请求共享的资源
///
/// 使用 Clone 浅拷贝 (SurrealDB 句柄内部是 Arc)，通过 axum `State` 注入处理器。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Database | SurrealDB 连接 |
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let repo = ProductRepository::new(state.db.clone());
/// ```
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库连接 (进程内唯一)
    pub db: Database,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 在开始监听之前打开数据库连接；连接失败直接返回错误，进程退出。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::connect(&config.database).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }
}
