//! 文件日志
//!
//! 终端被 UI 占用，日志只写入文件：
//!     <data dir>/dfp-playground/logs/playground.log.<date>
//!
//! 库 crate 使用 `log` 门面，`try_init` 会同时安装 `LogTracer`，
//! 两种来源的日志都进入同一个订阅者。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("dfp-playground")
        .join("logs")
}

/// 初始化日志。返回的 guard 必须存活到程序结束，否则缓冲的日志会丢失。
///
/// `RUST_LOG` 优先，否则使用 `default_level`。
pub fn init_logging(default_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "playground.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}
