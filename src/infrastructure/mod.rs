//! 基础设施层：配置、日志、外部服务客户端

pub mod config;
pub mod logger;
pub mod telegram;
