//! 测试公共模块
//! 提供测试辅助函数

use secrecy::Secret;
use secureweb::{
    config::{AppConfig, LoggingConfig, SecurityConfig, ServerConfig},
    middleware::AppState,
    services::AuthService,
};
use std::sync::Arc;

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(), // 使用随机端口
            graceful_shutdown_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            demo_username: "admin".to_string(),
            demo_password: Secret::new("password".to_string()),
        },
    }
}

/// 创建测试应用状态
pub fn create_test_app_state() -> Arc<AppState> {
    let config = create_test_config();
    let auth_service = Arc::new(AuthService::new(config.security.clone()));

    Arc::new(AppState {
        config,
        auth_service,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_config() {
        let config = create_test_config();
        assert_eq!(config.server.addr, "127.0.0.1:0");
        assert_eq!(config.security.demo_username, "admin");
    }
}
