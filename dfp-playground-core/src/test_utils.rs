//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dfp_playground_api::{
    ApiError, Network, NetworkList, PlaygroundApi, QueryResponse, Result, Row,
};
use serde_json::Value;
use tokio::sync::Mutex;

// ===== MockPlaygroundApi =====

/// In-memory API: a fixed network list and a queue of scripted query
/// outcomes. An empty queue answers with an empty result.
pub struct MockPlaygroundApi {
    networks: Vec<Network>,
    /// 如果 Some，下一次 list_networks 返回此错误
    list_networks_error: Mutex<Option<ApiError>>,
    query_outcomes: Mutex<VecDeque<Result<QueryResponse>>>,
    query_uris: Mutex<Vec<String>>,
    list_networks_calls: AtomicUsize,
    make_test_network_calls: AtomicUsize,
}

impl MockPlaygroundApi {
    pub fn with_networks(codes: &[&str]) -> Self {
        Self {
            networks: codes.iter().map(|c| Network::with_code(*c)).collect(),
            list_networks_error: Mutex::new(None),
            query_outcomes: Mutex::new(VecDeque::new()),
            query_uris: Mutex::new(Vec::new()),
            list_networks_calls: AtomicUsize::new(0),
            make_test_network_calls: AtomicUsize::new(0),
        }
    }

    pub async fn fail_next_list_networks(&self, err: ApiError) {
        *self.list_networks_error.lock().await = Some(err);
    }

    pub async fn push_query(&self, outcome: Result<QueryResponse>) {
        self.query_outcomes.lock().await.push_back(outcome);
    }

    pub async fn query_uris(&self) -> Vec<String> {
        self.query_uris.lock().await.clone()
    }

    pub fn list_networks_calls(&self) -> usize {
        self.list_networks_calls.load(Ordering::SeqCst)
    }

    pub fn make_test_network_calls(&self) -> usize {
        self.make_test_network_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaygroundApi for MockPlaygroundApi {
    async fn list_networks(&self) -> Result<NetworkList> {
        self.list_networks_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.list_networks_error.lock().await.take() {
            return Err(err);
        }
        Ok(NetworkList {
            results: self.networks.clone(),
            total_result_set_size: Some(self.networks.len() as u64),
        })
    }

    async fn query(&self, uri: &str) -> Result<QueryResponse> {
        self.query_uris.lock().await.push(uri.to_string());
        self.query_outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(QueryResponse::default()))
    }

    async fn make_test_network(&self) -> Result<()> {
        self.make_test_network_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// Response with `rows` and an optional total; rows must be JSON objects.
pub fn query_response(rows: Vec<Value>, total: Option<u64>) -> QueryResponse {
    QueryResponse {
        results: rows
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect::<Vec<Row>>(),
        columns: None,
        total_result_set_size: total,
        limit: None,
        offset: None,
    }
}
