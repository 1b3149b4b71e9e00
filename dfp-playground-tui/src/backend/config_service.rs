//! 配置服务
//!
//! 配置文件为 TOML，位置：
//!     $DFP_PLAYGROUND_CONFIG
//!     否则 <config dir>/dfp-playground/config.toml
//!
//! 文件不存在时使用默认值。`DFP_PLAYGROUND_API_URL` 覆盖 `api_base_url`。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dfp_playground_api::ApiClientConfig;
use dfp_playground_core::QueryDefaults;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "DFP_PLAYGROUND_CONFIG";
/// API 地址覆盖环境变量
pub const API_URL_ENV: &str = "DFP_PLAYGROUND_API_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Playground 服务地址，可带路径前缀（如 `http://host/playground/`）
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// 瞬时错误（超时、429、5xx）的重试次数
    pub max_retries: u32,
    pub default_limit: u32,
    pub default_offset: u32,
    pub theme: Theme,
    /// `RUST_LOG` 未设置时使用的日志级别
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8008".to_string(),
            request_timeout_secs: 10,
            max_retries: 0,
            default_limit: 100,
            default_offset: 0,
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Transport settings for the HTTP client.
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_retries: self.max_retries,
            ..ApiClientConfig::default()
        }
    }

    pub fn query_defaults(&self) -> QueryDefaults {
        QueryDefaults {
            limit: self.default_limit,
            offset: self.default_offset,
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.api_base_url.trim().is_empty(),
            "api_base_url must not be empty"
        );
        anyhow::ensure!(
            self.request_timeout_secs > 0,
            "request_timeout_secs must be positive"
        );
        anyhow::ensure!(self.default_limit > 0, "default_limit must be positive");
        Ok(())
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 TOML 配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 按环境变量或平台配置目录确定路径
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV).map_or_else(
            || {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("dfp-playground")
                    .join("config.toml")
            },
            PathBuf::from,
        );
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = if self.path.exists() {
            let text = std::fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read {}", self.path.display()))?;
            toml::from_str::<AppConfig>(&text)
                .with_context(|| format!("invalid config file {}", self.path.display()))?
        } else {
            AppConfig::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        config
            .validate()
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("none.toml"));
        let config = service.load().unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.query_defaults(), QueryDefaults { limit: 100, offset: 0 });
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_limit = 50\ntheme = \"light\"\n").unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_limit = 0\n").unwrap();
        assert!(LocalConfigService::new(&path).load().is_err());

        std::fs::write(&path, "default_limit = \"many\"\n").unwrap();
        assert!(LocalConfigService::new(&path).load().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested").join("config.toml"));
        let config = AppConfig {
            max_retries: 3,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap().max_retries, 3);
    }

    #[test]
    fn client_config_uses_timeout() {
        let config = AppConfig {
            request_timeout_secs: 3,
            ..AppConfig::default()
        };
        assert_eq!(config.client_config().timeout, Duration::from_secs(3));
    }
}
