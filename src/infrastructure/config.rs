//! 配置基础设施

use std::env;

/// 应用配置，启动时从环境变量读取一次
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub data_dir: String,
    pub public_dir: String,
}

impl AppConfig {
    /// 从环境变量构建配置
    ///
    /// Telegram 凭据缺失时保持为空字符串，webhook 调用会在发送时失败。
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            port,
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}
