//! 产品目录数据模型

use serde::Serialize;

/// 一条产品记录，对应数据文件中一个 `---` 分隔的区块
///
/// 所有字段保持字符串原样；price 只用于展示，不做数值解析。
/// 记录在每个请求内重新解析，创建后不再修改。
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: String,
    /// 图片字段原文，形如 `["a.jpg", "b.jpg"]` 的数组字面量
    pub img: String,
    pub description: Option<String>,
}

impl ProductRecord {
    /// 解析图片数组字面量，容忍单引号；解析失败时返回空列表
    pub fn images(&self) -> Vec<String> {
        let normalized = self.img.replace('\'', "\"");
        serde_json::from_str(&normalized).unwrap_or_default()
    }

    /// 描述的第一句话（第一个句号之前的部分），没有描述时为空
    pub fn short_description(&self) -> &str {
        match &self.description {
            Some(desc) => desc.split('.').next().unwrap_or(""),
            None => "",
        }
    }
}
