//! 产品目录应用：解析文本产品数据并渲染页面

pub mod handler;
pub mod model;
pub mod parser;
pub mod render;
pub mod service;

/// 产品数据源类别，详情查找时按此顺序扫描
pub const CATEGORIES: &[&str] = &["clothes", "jewellery"];
