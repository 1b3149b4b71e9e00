//! 业务逻辑服务层

mod network_context;
pub mod pagination;
mod tab_orchestrator;

pub use network_context::{LoadOutcome, NetworkContext};
pub use pagination::{continuation_links, PAGE_SIZE};
pub use tab_orchestrator::{
    format_error, PendingRequest, TabOrchestrator, INVALID_CLAUSE_HINT, NO_NETWORK_HINT,
};

use std::sync::Arc;

use dfp_playground_api::PlaygroundApi;

/// 服务上下文 - 持有所有依赖
///
/// 前端创建此上下文并注入 API 实现，网络上下文由所有标签页共享。
pub struct ServiceContext {
    /// Playground API
    pub api: Arc<dyn PlaygroundApi>,
    /// 共享的网络选择
    pub network: NetworkContext,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn PlaygroundApi>, network: NetworkContext) -> Self {
        Self { api, network }
    }

    /// 加载网络列表（成功后不再重复请求）
    pub async fn load_networks(&self) -> crate::CoreResult<LoadOutcome> {
        self.network.load_networks(self.api.as_ref()).await
    }

    /// 创建测试网络并重新加载网络列表
    pub async fn create_test_network(&self) -> crate::CoreResult<LoadOutcome> {
        self.network.create_test_network(self.api.as_ref()).await
    }
}
