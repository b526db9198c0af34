//! 日志初始化
//!
//! 安装全局 tracing subscriber。日志级别由 `RUST_LOG` 控制，
//! 未设置时默认为 `info`（verbose 模式为 `debug`）。日志写到 stderr，
//! stdout 只输出结果。

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALISED: OnceCell<()> = OnceCell::new();

/// 日志初始化错误
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("日志过滤规则无效: {0}")]
    InvalidFilter(String),

    #[error("安装 tracing subscriber 失败: {0}")]
    InstallFailed(#[from] tracing_subscriber::util::TryInitError),
}

/// 默认过滤规则
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// 安装全局日志，重复调用无副作用
pub fn init_logging(verbose: bool) -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(verbose))
            .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let _ = INITIALISED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "info");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        // 其他测试可能已安装 subscriber，这里只要求第二次调用不报错
        let _ = init_logging(false);
        if INITIALISED.get().is_some() {
            assert!(init_logging(true).is_ok());
        }
    }
}
