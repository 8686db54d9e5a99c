//! 认证服务
//! 将登录请求与配置中的演示账号比对

use crate::{config::SecurityConfig, error::AppError, models::auth::LoginRequest};
use secrecy::ExposeSecret;

/// 登录成功时的固定响应体
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// 认证服务
///
/// 持有配置的演示账号。比对是纯函数：无状态、无 I/O，
/// 任意并发调用互不影响。
pub struct AuthService {
    security: SecurityConfig,
}

impl AuthService {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// 登录比对
    ///
    /// 用户名与密码均须与演示账号完全一致（区分大小写）。
    /// 任一不匹配（包括缺省字段解码出的空串）即拒绝。
    pub fn login(&self, req: &LoginRequest) -> Result<&'static str, AppError> {
        if req.username == self.security.demo_username
            && req.password == self.security.demo_password.expose_secret().as_str()
        {
            tracing::info!(username = %req.username, "Login successful");
            Ok(LOGIN_SUCCESS_MESSAGE)
        } else {
            tracing::warn!(username = %req.username, "Login attempt rejected");
            Err(AppError::InvalidCredentials)
        }
    }
}
