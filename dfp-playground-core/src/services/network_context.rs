//! 网络上下文：已加载的网络列表与当前选中的网络代码
//!
//! 所有标签页共享同一个 [`NetworkContext`]（克隆即共享），查询时读取选中的网络，
//! 只有网络加载流程和用户选择会写入。

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dfp_playground_api::{Network, PlaygroundApi};

use crate::error::CoreResult;

/// Result of [`NetworkContext::load_networks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A previous load succeeded; nothing was fetched.
    AlreadyLoaded,
    /// Fetched this many networks.
    Loaded(usize),
}

#[derive(Debug, Default)]
struct NetworkState {
    /// `None` until the first successful load.
    networks: Option<Vec<Network>>,
    /// Empty string means "no network selected".
    selected_code: String,
}

/// Shared handle to the network list and selection.
#[derive(Debug, Clone, Default)]
pub struct NetworkContext {
    state: Arc<RwLock<NetworkState>>,
}

impl NetworkContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, NetworkState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NetworkState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the network list once.
    ///
    /// After a successful load every further call returns
    /// [`LoadOutcome::AlreadyLoaded`] without touching the API. A failed
    /// fetch leaves the context unloaded so the caller can try again.
    /// The first network becomes the selection.
    pub async fn load_networks(&self, api: &dyn PlaygroundApi) -> CoreResult<LoadOutcome> {
        if self.is_loaded() {
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let list = api.list_networks().await.inspect_err(|e| {
            log::warn!("Failed to load networks: {e}");
        })?;

        let count = list.results.len();
        let mut state = self.write();
        if let Some(first) = list.results.first() {
            state.selected_code.clone_from(&first.network_code);
        }
        state.networks = Some(list.results);
        drop(state);

        log::info!("Loaded {count} network(s)");
        Ok(LoadOutcome::Loaded(count))
    }

    /// Create a test network, then reload the list from scratch.
    ///
    /// The previous list and selection are discarded before reloading, so
    /// the selection ends up on whichever network the server lists first.
    pub async fn create_test_network(&self, api: &dyn PlaygroundApi) -> CoreResult<LoadOutcome> {
        api.make_test_network().await?;
        log::info!("Test network created, reloading networks");
        self.reset();
        self.load_networks(api).await
    }

    /// Forget the loaded list and selection.
    pub fn reset(&self) {
        *self.write() = NetworkState::default();
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read().networks.is_some()
    }

    /// Loaded networks; empty before the first successful load.
    #[must_use]
    pub fn networks(&self) -> Vec<Network> {
        self.read().networks.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn selected_code(&self) -> String {
        self.read().selected_code.clone()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.read().selected_code.is_empty()
    }

    /// The selected network, if it is part of the loaded list.
    #[must_use]
    pub fn selected_network(&self) -> Option<Network> {
        let state = self.read();
        state
            .networks
            .as_ref()?
            .iter()
            .find(|n| n.network_code == state.selected_code)
            .cloned()
    }

    /// Overwrite the selection. Any code is accepted, including one that is
    /// not in the loaded list; an empty code clears the selection.
    pub fn select(&self, code: impl Into<String>) {
        let code = code.into();
        log::debug!("Selected network '{code}'");
        self.write().selected_code = code;
    }
}
