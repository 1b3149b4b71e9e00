use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NetworkList, QueryResponse};

/// Playground REST API
///
/// The seam between request orchestration and HTTP. The core crate only
/// ever talks to this trait; tests substitute an in-memory implementation.
#[async_trait]
pub trait PlaygroundApi: Send + Sync {
    /// `GET /api/networks`
    async fn list_networks(&self) -> Result<NetworkList>;

    /// `GET <uri>`
    ///
    /// `uri` is a server-relative request URI such as
    /// `/api/adunits?where=...&network_code=...&limit=100&offset=0`,
    /// usually produced by [`QueryParams::uri`](crate::QueryParams::uri)
    /// or replayed from a stored pagination plan.
    async fn query(&self, uri: &str) -> Result<QueryResponse>;

    /// `POST /api/networks`: create a test network for the signed-in user.
    async fn make_test_network(&self) -> Result<()>;
}
