//! 表单应用数据模型

use serde::Deserialize;

/// 联系表单请求
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// 订单表单请求
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub product: String,
    pub price: String,
}
