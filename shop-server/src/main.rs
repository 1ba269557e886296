use shop_server::{Config, Server, ServerError, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载并检查配置
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        let err = ServerError::Config(e);
        eprintln!("{}", err);
        return Err(err.into());
    }

    // 3. 初始化日志
    setup_environment(&config)?;

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database.url,
        "🛒 Shop server starting..."
    );

    // 4. 打开数据库连接 (失败直接退出)
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
