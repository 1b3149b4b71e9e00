//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│      ┌──────────┐   execute(pending)   ┌─────────────────────────┐         │
//！│      │  Update  │ ───────────────────▶ │    PlaygroundService    │         │
//！│      │    层    │                      │  (tokio 运行时上 spawn)  │         │
//！│      └──────────┘                      └────────────┬────────────┘         │
//！│           ▲                                         │                      │
//！│           │ AppMessage::Backend(..)                 ▼                      │
//！│      ┌──────────┐      mpsc 通道       ┌─────────────────────────┐         │
//！│      │  主循环   │ ◀─────────────────── │  dfp-playground-core    │         │
//！│      │ try_recv │                      │  dfp-playground-api     │         │
//！│      └──────────┘                      └─────────────────────────┘         │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责和 playground 服务器通信。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置（TOML 文件）
//!         mod playground_service;     // 请求调度
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     从 $DFP_PLAYGROUND_CONFIG 或 <config dir>/dfp-playground/config.toml
//!     读取 AppConfig，文件不存在时使用默认值。
//!
//!         api_base_url            = "http://localhost:8008"
//!         request_timeout_secs    = 10
//!         max_retries             = 0
//!         default_limit           = 100
//!         default_offset          = 0
//!         theme                   = "dark"
//!         log_level               = "info"
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、请求调度（PlaygroundService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 按配置创建 HttpPlaygroundApi
//!         2. 创建共享的 NetworkContext
//!         3. 组装 ServiceContext，交给 TabOrchestrator
//!
//!     提供的操作（都立即返回，结果稍后通过通道送达）：
//!         - load_networks()           加载网络列表（成功一次后不再请求）
//!         - create_test_network()     创建测试网络并重新加载
//!         - execute(pending)          执行标签页请求
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在查询弹窗中按 Enter
//!         ↓
//!     Update 层调用 TabOrchestrator::begin_query()，标签页进入 loading
//!         ↓
//!     PlaygroundService::execute(pending) 在运行时上发起 GET
//!         ↓
//!     BackendMessage::QueryCompleted 经通道回到主循环
//!         ↓
//!     Update 层调用 TabOrchestrator::complete()
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod playground_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use playground_service::PlaygroundService;
