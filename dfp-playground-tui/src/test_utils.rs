//! 测试辅助：内存中的 Playground API 与预装好网络列表的 App

use std::sync::Arc;

use async_trait::async_trait;
use dfp_playground_api::{
    ApiError, Network, NetworkList, PlaygroundApi, QueryResponse, Result as ApiResult,
};
use dfp_playground_core::services::{NetworkContext, ServiceContext};
use tokio::runtime::Runtime;

use crate::backend::{AppConfig, PlaygroundService};
use crate::model::App;

/// 固定返回给定网络、查询总是返回空结果的 API
pub struct StubApi {
    codes: Vec<String>,
}

#[async_trait]
impl PlaygroundApi for StubApi {
    async fn list_networks(&self) -> ApiResult<NetworkList> {
        Ok(NetworkList {
            results: self.codes.iter().map(Network::with_code).collect(),
            total_result_set_size: Some(self.codes.len() as u64),
        })
    }

    async fn query(&self, _uri: &str) -> ApiResult<QueryResponse> {
        Ok(QueryResponse::default())
    }

    async fn make_test_network(&self) -> ApiResult<()> {
        Err(ApiError::http(403))
    }
}

/// 创建 App；`codes` 非空时网络列表已加载完毕（选中第一个）
///
/// 返回的运行时必须活得和 App 一样久，后台任务跑在它上面。
pub fn test_app(codes: &[&str]) -> (Runtime, App) {
    let rt = Runtime::new().expect("tokio runtime");
    let api = StubApi {
        codes: codes.iter().map(|c| c.to_string()).collect(),
    };
    let ctx = Arc::new(ServiceContext::new(Arc::new(api), NetworkContext::new()));
    if !codes.is_empty() {
        rt.block_on(ctx.load_networks()).expect("load networks");
    }

    let (service, inbox) = PlaygroundService::new(ctx, rt.handle().clone());
    let app = App::new(&AppConfig::default(), service, inbox);
    (rt, app)
}
