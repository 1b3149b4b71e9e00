//! 应用主状态结构

use dfp_playground_core::{NetworkContext, Tab, TabOrchestrator};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{FocusPanel, ModalState, ResultsState};
use crate::backend::{AppConfig, PlaygroundService};
use crate::message::BackendMessage;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 所有标签页及其请求状态
    pub orchestrator: TabOrchestrator,

    /// 各标签页结果列表的选中行
    pub results: ResultsState,

    /// 网络列表是否正在加载
    pub networks_loading: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 主循环计数，用于加载动画
    pub tick: usize,

    /// 后台服务
    pub service: PlaygroundService,

    /// 后台消息接收端
    pub inbox: UnboundedReceiver<BackendMessage>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        config: &AppConfig,
        service: PlaygroundService,
        inbox: UnboundedReceiver<BackendMessage>,
    ) -> Self {
        let orchestrator = TabOrchestrator::new(service.context(), config.query_defaults());
        let results = ResultsState::new(orchestrator.tabs().len());
        Self {
            should_quit: false,
            focus: FocusPanel::TabStrip,
            orchestrator,
            results,
            networks_loading: false,
            status_message: None,
            modal: ModalState::new(),
            tick: 0,
            service,
            inbox,
        }
    }

    /// 共享的网络上下文
    pub fn network(&self) -> &NetworkContext {
        self.orchestrator.network()
    }

    /// 当前标签页
    pub fn active_tab(&self) -> &Tab {
        self.orchestrator.active_tab()
    }

    /// 开始加载网络列表
    pub fn load_networks(&mut self) {
        self.networks_loading = true;
        self.set_status("Loading networks...");
        self.service.load_networks();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
