//! Shop Server - 小型网店后端
//!
//! # 架构概述
//!
//! 提供商品目录、店铺设置和订单三组 JSON 接口，数据存放在 SurrealDB：
//!
//! - **数据库** (`db`): SurrealDB 连接 (mem:// 或远程) 与各集合的仓储
//! - **HTTP API** (`api`): RESTful 接口
//! - **路由** (`routes`): 路由汇总与中间件栈
//!
//! # 模块结构
//!
//! ```text
//! shop-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由汇总 + 中间件
//! ├── middleware/    # 请求日志
//! ├── utils/         # 错误响应、日志、请求体校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 按配置初始化日志
///
/// `.env` 需在 [`Config::from_env`] 之前加载，见 `main.rs`。
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ____  ____
  \__ \/ __ \/ __ \/ __ \
 ___/ / / / / /_/ / /_/ /
/____/_/ /_/\____/ .___/
                /_/
    "#
    );
}
