//! 认证相关的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, models::auth::LoginRequest};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// 登录
///
/// 请求体解码失败（非 JSON、字段类型错误等）由 Json 提取器
/// 以 4xx 拒绝，不会进入本处理器。
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = state.auth_service.login(&req)?;
    Ok((StatusCode::OK, message))
}
