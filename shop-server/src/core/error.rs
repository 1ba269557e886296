use thiserror::Error;

/// 启动/运行期错误 (请求级错误见 [`crate::utils::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库连接失败: {0}")]
    Database(#[from] surrealdb::Error),

    #[error("监听失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
