//! 产品目录业务服务

use std::path::PathBuf;

use tokio::fs;
use tracing::warn;

use super::{model::ProductRecord, parser, render, CATEGORIES};
use crate::core::error::CoreError;

/// 目录服务：每个请求重新读取并解析数据文件，不做任何缓存
#[derive(Clone)]
pub struct CatalogService {
    data_dir: PathBuf,
    public_dir: PathBuf,
}

impl CatalogService {
    pub fn new(data_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            public_dir: public_dir.into(),
        }
    }

    /// 渲染一个类别的列表页
    pub async fn category_page(&self, category: &str) -> Result<String, CoreError> {
        let data = fs::read_to_string(self.data_dir.join(format!("{category}.txt")))
            .await
            .map_err(|_| CoreError::DataUnavailable(category.to_string()))?;

        let products = parser::parse_products(&data);
        let cards: Vec<String> = products.iter().map(render::render_card).collect();

        let template = fs::read_to_string(self.public_dir.join(format!("{category}.html")))
            .await
            .map_err(|_| CoreError::TemplateUnavailable)?;

        Ok(render::fill_placeholder(
            &template,
            "{{card}}",
            &cards.join("\n"),
        ))
    }

    /// 渲染产品详情页，找不到产品时返回 ProductNotFound
    pub async fn product_page(&self, id: &str) -> Result<String, CoreError> {
        let template = fs::read_to_string(self.public_dir.join("product.html"))
            .await
            .map_err(|_| CoreError::TemplateUnavailable)?;

        let product = self
            .find_product(id)
            .await
            .ok_or(CoreError::ProductNotFound)?;

        Ok(render::render_detail_page(&template, &product))
    }

    /// 按类别列表顺序依次扫描数据源，返回第一个 id 匹配的记录
    ///
    /// 顺序扫描保证"先匹配者胜"是确定的列表顺序。
    /// 读取失败的数据源跳过，不影响后续数据源。
    pub async fn find_product(&self, id: &str) -> Option<ProductRecord> {
        for category in CATEGORIES {
            let path = self.data_dir.join(format!("{category}.txt"));
            let data = match fs::read_to_string(&path).await {
                Ok(data) => data,
                Err(e) => {
                    warn!("跳过不可读的数据源 {:?}: {}", path, e);
                    continue;
                }
            };

            let matched = parser::parse_products(&data)
                .into_iter()
                .find(|p| p.id == id);
            if matched.is_some() {
                return matched;
            }
        }
        None
    }
}
