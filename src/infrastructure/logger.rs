//! 日志基础设施

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅器，RUST_LOG 优先于默认级别
    pub fn init(default_level: Level) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
