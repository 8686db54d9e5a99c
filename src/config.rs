//! 配置系统
//! 从环境变量加载所有配置，使用 Secret 包装敏感信息

use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址，例如 "0.0.0.0:5000"
    pub addr: String,
    /// 优雅关闭超时时间（秒）
    pub graceful_shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
    /// 日志格式: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// 演示账号用户名
    pub demo_username: String,
    /// 演示账号密码（使用 Secret 包装，防止日志泄露）
    pub demo_password: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Config::builder();

        // 添加默认配置
        settings = settings
            .set_default("server.addr", "0.0.0.0:5000")?
            .set_default("server.graceful_shutdown_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("security.demo_username", "admin")?
            .set_default("security.demo_password", "password")?;

        // 从环境变量加载配置（前缀为 SECUREWEB_）
        settings = settings.add_source(
            Environment::with_prefix("SECUREWEB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        // 验证配置
        config.validate()?;

        Ok(config)
    }

    /// 验证配置合法性
    fn validate(&self) -> Result<(), ConfigError> {
        // 验证端口范围
        if let Some(port_str) = self.server.addr.split(':').next_back() {
            if let Ok(port) = port_str.parse::<u16>() {
                if port < 1024 {
                    return Err(ConfigError::Message("Server port should be >= 1024".to_string()));
                }
            }
        }

        // 验证日志级别
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        // 验证日志格式
        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty",
                    self.logging.format
                )))
            }
        }

        // 验证演示账号用户名非空
        if self.security.demo_username.is_empty() {
            return Err(ConfigError::Message(
                "demo_username must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        // 清理所有可能的环境变量
        std::env::remove_var("SECUREWEB_SERVER__ADDR");
        std::env::remove_var("SECUREWEB_LOGGING__LEVEL");
        std::env::remove_var("SECUREWEB_LOGGING__FORMAT");
        std::env::remove_var("SECUREWEB_SECURITY__DEMO_USERNAME");
        std::env::remove_var("SECUREWEB_SECURITY__DEMO_PASSWORD");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:5000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.security.demo_username, "admin");
        assert_eq!(config.security.demo_password.expose_secret(), "password");
    }

    #[test]
    #[serial]
    fn test_config_env_override() {
        std::env::remove_var("SECUREWEB_LOGGING__LEVEL");
        std::env::set_var("SECUREWEB_SERVER__ADDR", "127.0.0.1:8080");
        std::env::set_var("SECUREWEB_SECURITY__DEMO_USERNAME", "operator");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:8080");
        assert_eq!(config.security.demo_username, "operator");

        std::env::remove_var("SECUREWEB_SERVER__ADDR");
        std::env::remove_var("SECUREWEB_SECURITY__DEMO_USERNAME");
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_port() {
        // 清理环境变量
        std::env::remove_var("SECUREWEB_SERVER__ADDR");

        std::env::set_var("SECUREWEB_SERVER__ADDR", "0.0.0.0:80");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("SECUREWEB_SERVER__ADDR");
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_log_level() {
        // 清理环境变量
        std::env::remove_var("SECUREWEB_LOGGING__LEVEL");
        std::env::remove_var("SECUREWEB_SERVER__ADDR");

        std::env::set_var("SECUREWEB_LOGGING__LEVEL", "invalid");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("SECUREWEB_LOGGING__LEVEL");
    }
}
