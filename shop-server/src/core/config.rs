/// 服务器配置 - 商店 API 的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 3000 | HTTP 服务端口 |
/// | BIND_ADDR | 0.0.0.0 | 监听地址 |
/// | DATABASE_URL | mem:// | SurrealDB 连接地址 |
/// | DATABASE_NAMESPACE | shop | SurrealDB namespace |
/// | DATABASE_NAME | shop | SurrealDB database |
/// | DATABASE_USER / DATABASE_PASS | - | root 账号 (两者都设置时登录) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | production 时为 true | JSON 日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | MAX_BODY_BYTES | 10485760 | 请求体上限 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=ws://localhost:8000 PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 监听地址
    pub bind_addr: String,
    /// 数据库连接配置
    pub database: DatabaseConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 请求体大小上限 (字节)，需容纳 base64 付款截图
    pub max_body_bytes: usize,
}

/// SurrealDB 连接配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// ws://host:port, http://host:port 或 mem://
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// Root credentials, only when both user and password are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// In-process store (data is lost on exit)
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("mem://")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mem://".into(),
            namespace: "shop".into(),
            database: "shop".into(),
            username: None,
            password: None,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = DatabaseConfig::default();

        Self {
            http_port: env_parse("PORT").unwrap_or(3000),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into()),
            database: DatabaseConfig {
                url: env_non_empty("DATABASE_URL").unwrap_or(defaults.url),
                namespace: env_non_empty("DATABASE_NAMESPACE").unwrap_or(defaults.namespace),
                database: env_non_empty("DATABASE_NAME").unwrap_or(defaults.database),
                username: env_non_empty("DATABASE_USER"),
                password: env_non_empty("DATABASE_PASS"),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(environment == "production"),
            log_dir: env_non_empty("LOG_DIR"),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(10 * 1024 * 1024),
            environment,
        }
    }

    /// 测试用配置: 内存数据库, 随机端口
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            bind_addr: "127.0.0.1".into(),
            database: DatabaseConfig::default(),
            environment: "test".into(),
            log_level: "warn".into(),
            log_json: false,
            log_dir: None,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }

    /// 启动前检查配置
    pub fn validate(&self) -> Result<(), String> {
        if self.is_production() && self.database.is_in_memory() {
            return Err("DATABASE_URL must point to a persistent SurrealDB server in production".into());
        }
        if self.max_body_bytes == 0 {
            return Err("MAX_BODY_BYTES must be greater than 0".into());
        }
        Ok(())
    }

    /// 监听地址 host:port
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
