//! Playground 服务
//!
//! 持有 ServiceContext 和 tokio 运行时句柄。所有请求都 spawn 到运行时上执行，
//! 结果通过 mpsc 通道发回主循环，主循环本身保持同步。

use std::sync::Arc;

use anyhow::{Context, Result};
use dfp_playground_api::{HttpPlaygroundApi, PlaygroundApi};
use dfp_playground_core::services::{NetworkContext, PendingRequest, ServiceContext};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::AppConfig;
use crate::message::BackendMessage;

/// TUI 后台服务
pub struct PlaygroundService {
    ctx: Arc<ServiceContext>,
    runtime: Handle,
    tx: UnboundedSender<BackendMessage>,
}

impl PlaygroundService {
    /// 基于已有的上下文创建服务，返回服务和消息接收端
    pub fn new(
        ctx: Arc<ServiceContext>,
        runtime: Handle,
    ) -> (Self, UnboundedReceiver<BackendMessage>) {
        let (tx, rx) = unbounded_channel();
        (Self { ctx, runtime, tx }, rx)
    }

    /// 按配置创建 HTTP 客户端和服务上下文
    pub fn from_config(
        config: &AppConfig,
        runtime: Handle,
    ) -> Result<(Self, UnboundedReceiver<BackendMessage>)> {
        let api = HttpPlaygroundApi::new(config.client_config())
            .with_context(|| format!("cannot use api_base_url '{}'", config.api_base_url))?;
        log::info!("Using playground server at {}", api.base_url());

        let ctx = Arc::new(ServiceContext::new(Arc::new(api), NetworkContext::new()));
        Ok(Self::new(ctx, runtime))
    }

    /// 服务上下文（供 TabOrchestrator 使用）
    pub fn context(&self) -> Arc<ServiceContext> {
        Arc::clone(&self.ctx)
    }

    /// 加载网络列表
    pub fn load_networks(&self) {
        let ctx = Arc::clone(&self.ctx);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = ctx.load_networks().await.map_err(|e| e.to_string());
            send(&tx, BackendMessage::NetworksLoaded(outcome));
        });
    }

    /// 创建测试网络，然后重新加载网络列表
    pub fn create_test_network(&self) {
        let ctx = Arc::clone(&self.ctx);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = ctx.create_test_network().await.map_err(|e| e.to_string());
            send(&tx, BackendMessage::TestNetworkCreated(outcome));
        });
    }

    /// 执行 TabOrchestrator 已经开始的请求
    pub fn execute(&self, pending: PendingRequest) {
        let api = Arc::clone(&self.ctx.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = api.query(pending.uri()).await;
            send(&tx, BackendMessage::QueryCompleted { pending, outcome });
        });
    }
}

fn send(tx: &UnboundedSender<BackendMessage>, msg: BackendMessage) {
    // 接收端只会在退出时被丢弃
    if tx.send(msg).is_err() {
        log::debug!("Backend message dropped: UI has shut down");
    }
}
