//! 后台任务回传的消息

use dfp_playground_api::{ApiError, QueryResponse};
use dfp_playground_core::services::{LoadOutcome, PendingRequest};

/// 后台任务完成后发回主循环的消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 网络列表加载结束
    NetworksLoaded(Result<LoadOutcome, String>),

    /// 测试网络创建结束（成功时网络列表已重新加载）
    TestNetworkCreated(Result<LoadOutcome, String>),

    /// 标签页请求结束
    QueryCompleted {
        pending: PendingRequest,
        outcome: Result<QueryResponse, ApiError>,
    },
}
