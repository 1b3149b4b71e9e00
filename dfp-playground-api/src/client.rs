//! reqwest-backed [`PlaygroundApi`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::PlaygroundApi;
use crate::types::{NetworkList, QueryResponse};

const NETWORKS_URI: &str = "/api/networks";

/// Connection settings for [`HttpPlaygroundApi`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Root of the playground server. May carry a path prefix when the
    /// server is mounted below `/`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries for transient failures; 0 disables retrying.
    pub max_retries: u32,
    pub user_agent: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8008".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 0,
            user_agent: concat!("dfp-playground/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client for the playground server.
pub struct HttpPlaygroundApi {
    client: Client,
    /// Same settings, but redirects are returned instead of followed.
    action_client: Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpPlaygroundApi {
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            detail: format!("{}: {e}", config.base_url),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                detail: format!("{} cannot be used as a base URL", config.base_url),
            });
        }
        // 以 `/` 结尾，join 时才会保留路径前缀
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let build = |policy: Policy| {
            Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.clone())
                .redirect(policy)
                .build()
                .map_err(|e| ApiError::NetworkError {
                    detail: format!("Failed to build HTTP client: {e}"),
                })
        };
        let client = build(Policy::default())?;
        let action_client = build(Policy::none())?;

        Ok(Self {
            client,
            action_client,
            base_url,
            max_retries: config.max_retries,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Server-relative URIs (`/api/...`) resolve below the base path.
    fn resolve(&self, uri: &str) -> Result<Url> {
        let relative = uri.trim_start_matches('/');
        self.base_url.join(relative).map_err(|e| ApiError::InvalidUrl {
            detail: format!("{uri}: {e}"),
        })
    }
}

#[async_trait]
impl PlaygroundApi for HttpPlaygroundApi {
    async fn list_networks(&self) -> Result<NetworkList> {
        let url = self.resolve(NETWORKS_URI)?;
        let body = HttpUtils::execute_request_with_retry(
            self.client.get(url),
            "GET",
            NETWORKS_URI,
            self.max_retries,
        )
        .await?;
        HttpUtils::parse_json(&body)
    }

    async fn query(&self, uri: &str) -> Result<QueryResponse> {
        let url = self.resolve(uri)?;
        let body =
            HttpUtils::execute_request_with_retry(self.client.get(url), "GET", uri, self.max_retries)
                .await?;
        HttpUtils::parse_json(&body)
    }

    async fn make_test_network(&self) -> Result<()> {
        let url = self.resolve(NETWORKS_URI)?;
        // The server redirects to its home page, which needs a browser login;
        // the POST status alone decides success.
        HttpUtils::execute_action(self.action_client.post(url), "POST", NETWORKS_URI).await
    }
}
