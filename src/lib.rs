//! # Boutique Store 网店服务器
//!
//! 一个小型服饰精品店的 Web 服务器，包括：
//! - 从纯文本数据文件解析产品记录
//! - 通过字符串模板渲染列表页和详情页
//! - 把联系/订单表单转发到 Telegram 机器人
//! - 静态资源服务

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use app::catalog::service::CatalogService;
use app::forms::service::FormService;

/// 全局应用状态，随路由克隆
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub forms: FormService,
}

/// 构建完整路由：页面、表单、健康检查，静态资源兜底
pub fn build_router(state: AppState, public_dir: &str) -> Router {
    Router::new()
        .route("/clothes", get(app::catalog::handler::list_clothes))
        .route("/jewellery", get(app::catalog::handler::list_jewellery))
        .route("/product/:id", get(app::catalog::handler::product_detail))
        .route("/contact", post(app::forms::handler::submit_contact))
        .route("/order", post(app::forms::handler::submit_order))
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(
            core::middleware::request_logging_middleware,
        ))
        .with_state(state)
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
