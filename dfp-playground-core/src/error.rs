//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dfp_playground_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Tab index out of range
    #[error("Tab not found: {0}")]
    TabNotFound(usize),

    /// Route is not one of the tab's sub-routes
    #[error("Route '{route}' is not available on tab '{tab}'")]
    RouteNotFound { tab: String, route: String },

    /// Transport error (converted from the API library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// 是否为预期行为（用户输入等），用于日志分级。
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::TabNotFound(_) | Self::RouteNotFound { .. } => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
