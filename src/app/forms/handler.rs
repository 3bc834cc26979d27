//! 表单处理器

use axum::{extract::State, response::Json};

use super::model::{ContactRequest, OrderRequest};
use crate::core::{error::CoreError, response::SubmitResult};
use crate::AppState;

/// 处理联系表单提交
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactRequest>,
) -> Result<Json<SubmitResult>, CoreError> {
    let ok = state.forms.submit_contact(&form).await?;
    Ok(Json(SubmitResult::ok(ok)))
}

/// 处理订单表单提交
pub async fn submit_order(
    State(state): State<AppState>,
    Json(form): Json<OrderRequest>,
) -> Result<Json<SubmitResult>, CoreError> {
    let ok = state.forms.submit_order(&form).await?;
    Ok(Json(SubmitResult::ok(ok)))
}
