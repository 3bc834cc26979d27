//! 表单业务服务：格式化消息并转发到 Telegram

use super::model::{ContactRequest, OrderRequest};
use crate::core::error::CoreError;
use crate::infrastructure::telegram::TelegramNotifier;

#[derive(Clone)]
pub struct FormService {
    notifier: TelegramNotifier,
}

impl FormService {
    pub fn new(notifier: TelegramNotifier) -> Self {
        Self { notifier }
    }

    /// 转发联系表单，返回 Telegram 的成功标志
    pub async fn submit_contact(&self, form: &ContactRequest) -> Result<bool, CoreError> {
        self.notifier
            .send_message(&format_contact_message(form))
            .await
    }

    /// 转发订单表单，返回 Telegram 的成功标志
    pub async fn submit_order(&self, form: &OrderRequest) -> Result<bool, CoreError> {
        self.notifier
            .send_message(&format_order_message(form))
            .await
    }
}

/// 联系表单的 Markdown 消息文本
pub fn format_contact_message(form: &ContactRequest) -> String {
    format!(
        "📩 *New Contact Message*\n\n👤 *Name*: {}\n📧 *Email*: {}\n📝 *Message*: {}",
        form.name, form.email, form.message
    )
}

/// 订单表单的 Markdown 消息文本
pub fn format_order_message(form: &OrderRequest) -> String {
    format!(
        "🛍️ *New Order*\n\n👤 *Name*: {}\n📞 *Contact*: {}\n🏠 *Address*: {}\n\n📦 *Product*: {}\n💰 *Price*: ₹{}",
        form.name, form.contact, form.address, form.product, form.price
    )
}
