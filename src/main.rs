//! Boutique Store 服务器入口

use tokio::net::TcpListener;
use tracing::{info, Level};

use boutique_store::app::catalog::service::CatalogService;
use boutique_store::app::forms::service::FormService;
use boutique_store::infrastructure::{
    config::AppConfig, logger::Logger, telegram::TelegramNotifier,
};
use boutique_store::{build_router, AppState};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动 Boutique Store 服务器...");

    let config = AppConfig::from_env();

    let notifier = TelegramNotifier::new(
        config.telegram_bot_token.clone(),
        config.telegram_chat_id.clone(),
    );
    let state = AppState {
        catalog: CatalogService::new(&config.data_dir, &config.public_dir),
        forms: FormService::new(notifier),
    };

    let app = build_router(state, &config.public_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await.expect("无法绑定监听地址");

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 可用的路由:");
    info!("   GET  /clothes     - 服装列表页");
    info!("   GET  /jewellery   - 首饰列表页");
    info!("   GET  /product/:id - 产品详情页");
    info!("   POST /contact     - 联系表单");
    info!("   POST /order       - 订单表单");
    info!("   GET  /health      - 健康检查");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
