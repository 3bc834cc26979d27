//! 核心响应处理模块

use serde::Serialize;

/// 表单提交结果，success 直接透传 Telegram 的 ok 标志
#[derive(Debug, Serialize)]
pub struct SubmitResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResult {
    pub fn ok(success: bool) -> Self {
        Self {
            success,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}
