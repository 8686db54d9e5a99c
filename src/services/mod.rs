//! 业务服务模块

pub mod auth_service;

pub use auth_service::AuthService;
