//! Telegram 机器人通知基础设施

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// sendMessage 请求体
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Telegram API 响应中我们关心的部分
#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
}

/// Telegram 机器人客户端，克隆时复用同一个 reqwest 连接池
#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
            chat_id,
        }
    }

    /// 发送一条 Markdown 格式的消息，返回 Telegram 响应的 ok 标志
    ///
    /// 不做重试，传输层错误直接映射为 WebhookFailed。
    pub async fn send_message(&self, text: &str) -> Result<bool, CoreError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::WebhookFailed(e.to_string()))?;

        let result: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| CoreError::WebhookFailed(e.to_string()))?;

        Ok(result.ok)
    }
}
