//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::response::SubmitResult;

/// 核心错误类型
///
/// 所有错误对单个请求都是终态的，不做重试、不提供降级内容。
#[derive(Debug)]
pub enum CoreError {
    /// 产品数据文件缺失或不可读
    DataUnavailable(String),
    /// 页面模板缺失或不可读
    TemplateUnavailable,
    /// 请求的产品不存在
    ProductNotFound,
    /// Telegram webhook 调用失败
    WebhookFailed(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::DataUnavailable(category) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading {} data", category),
            )
                .into_response(),
            CoreError::TemplateUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading template".to_string(),
            )
                .into_response(),
            CoreError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "Product not found".to_string()).into_response()
            }
            CoreError::WebhookFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResult::failure(message)),
            )
                .into_response(),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::DataUnavailable(category) => write!(f, "数据文件不可用: {}", category),
            CoreError::TemplateUnavailable => write!(f, "模板文件不可用"),
            CoreError::ProductNotFound => write!(f, "产品不存在"),
            CoreError::WebhookFailed(message) => write!(f, "webhook 调用失败: {}", message),
        }
    }
}

impl std::error::Error for CoreError {}
