//! 产品目录处理器

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::core::error::CoreError;
use crate::AppState;

/// 服装列表页
pub async fn list_clothes(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    Ok(Html(state.catalog.category_page("clothes").await?))
}

/// 首饰列表页
pub async fn list_jewellery(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    Ok(Html(state.catalog.category_page("jewellery").await?))
}

/// 产品详情页
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    Ok(Html(state.catalog.product_page(&id).await?))
}
