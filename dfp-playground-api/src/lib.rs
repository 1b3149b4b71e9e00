//! # dfp-playground-api
//!
//! Wire model and HTTP transport for the DFP Playground REST API.
//!
//! The playground server exposes one read endpoint per ad-server service
//! (`/api/adunits`, `/api/lineitems`, `/api/pql`, ...) plus `/api/networks`.
//! Every service endpoint accepts the same query parameters:
//!
//! | parameter | meaning |
//! |-----------|---------|
//! | `where` | filter clause (or a full `SELECT` for the PQL endpoint) |
//! | `limit` | maximum number of rows |
//! | `offset` | index of the first row |
//! | `network_code` | network the query is scoped to |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dfp_playground_api::{ApiClientConfig, HttpPlaygroundApi, PlaygroundApi, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpPlaygroundApi::new(ApiClientConfig::new("http://localhost:8008"))?;
//!
//!     let networks = api.list_networks().await?;
//!     let code = networks.results.first().map(|n| n.network_code.clone()).unwrap_or_default();
//!
//!     let params = QueryParams::new("WHERE id != 0", 100, 0, code);
//!     let page = api.query(&params.uri("adunits")).await?;
//!     println!("{} rows, {:?} total", page.results.len(), page.total_result_set_size);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`](Result), an alias for
//! `std::result::Result<T, ApiError>`. A non-2xx response becomes
//! [`ApiError::Http`] carrying the status code; transport failures become
//! [`ApiError::NetworkError`] or [`ApiError::Timeout`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ApiClientConfig, HttpPlaygroundApi};
pub use error::{ApiError, Result};
pub use http_client::HttpUtils;
pub use traits::PlaygroundApi;
pub use types::{Network, NetworkList, QueryParams, QueryResponse, Row};
