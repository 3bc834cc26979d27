//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// 请求日志中间件，每个请求分配一个 UUID 便于关联日志
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "[{}] {} {} - {} - {}ms",
        request_id,
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
}
