//! DFP Playground TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台请求 (`backend/`)
//!
//!
//! main.rs
//! DFP Playground TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()      // 读取配置（缺失时使用默认值，并写出模板）
//!     init_logging()                  // 文件日志，guard 持有到退出
//!     Runtime::new()                  // 后台请求使用的 tokio 运行时
//!     model::App::new()               // 创建 APP 实例
//!     app.load_networks()             // 启动时立即加载网络列表
//!     init_terminal()                 // 进入原始模式和备用屏幕
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
#[cfg(test)]
mod test_utils;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use backend::{ConfigService, LocalConfigService, PlaygroundService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    let config_service = LocalConfigService::from_env();
    let config = config_service.load()?;
    view::theme::set_theme(config.theme);

    // 2. 日志（终端由 UI 占用，只写文件）
    let _log_guard = init_logging(&config.log_level)?;
    tracing::info!(
        "Starting DFP Playground {} with config {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            tracing::warn!("Could not write default config: {e:#}");
        }
    }

    // 3. 后台运行时与服务
    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let (service, inbox) = PlaygroundService::from_config(&config, runtime.handle().clone())?;

    // 4. 创建应用实例，开始加载网络
    let mut app = model::App::new(&config, service, inbox);
    app.load_networks();

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    tracing::info!("Bye");
    result
}
