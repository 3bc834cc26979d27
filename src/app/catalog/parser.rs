//! 产品记录解析器
//!
//! 数据文件格式：区块之间用 `---` 分隔，区块内每行一个 `key: value` 对。
//! 键在第一个冒号处切分并小写化，值里的冒号原样保留。

use std::collections::HashMap;

use super::model::ProductRecord;

/// 一条记录必须具备的字段，缺少任何一个的区块会被整体丢弃
const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "price", "img"];

/// 把原始文本解析成产品记录列表，保持区块出现顺序
///
/// 格式错误不报错：没有冒号的行被跳过，字段不全的区块被静默丢弃。
pub fn parse_products(raw: &str) -> Vec<ProductRecord> {
    raw.split("---").filter_map(parse_block).collect()
}

/// 解析单个区块；必填字段缺失或为空时返回 None
fn parse_block(block: &str) -> Option<ProductRecord> {
    let mut fields: HashMap<String, String> = HashMap::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // 只在第一个冒号处切分，值内的冒号保留
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        fields.insert(key, value.trim().to_string());
    }

    for field in REQUIRED_FIELDS {
        if fields.get(field).map(|v| v.is_empty()).unwrap_or(true) {
            return None;
        }
    }

    Some(ProductRecord {
        id: fields.remove("id").unwrap_or_default(),
        name: fields.remove("name").unwrap_or_default(),
        price: fields.remove("price").unwrap_or_default(),
        img: fields.remove("img").unwrap_or_default(),
        description: fields.remove("description"),
    })
}
