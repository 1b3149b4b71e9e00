//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（TabStrip / Results）
//!         pub mod state;      // 弹窗和结果列表选择状态
//!
//!     标签页本身（查询表单、请求状态、分页）不在这里定义，
//!     而是由 dfp-playground-core 的 TabOrchestrator 持有，App 只持有它。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: FocusPanel,                  // 当前焦点
//!             pub orchestrator: TabOrchestrator,      // 标签页（一服务一个）
//!             pub results: ResultsState,              // 各标签页选中的行
//!             pub networks_loading: bool,             // 网络列表加载中
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub modal: ModalState,                  // 弹窗状态
//!             pub tick: usize,                        // 主循环计数（加载动画）
//!             pub service: PlaygroundService,         // 后台服务
//!             pub inbox: UnboundedReceiver<..>,       // 后台消息
//!         }
//!
//!     当前标签页就是 orchestrator.active_index()，标签栏的选中项与之一致。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         - TabStrip：左侧服务标签栏，↑↓ 切换标签页
//!         - Results：右侧结果区，↑↓ 选择结果行
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::ToggleFocus
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.toggle()
//!             ↓
//!         view 层根据焦点设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - EditQuery { tab, filter_clause, limit, offset, focus, error }
//!             - NetworkPicker { selected }
//!             - RowDetail { title, body, scroll }
//!             - ConfirmTestNetwork { focus }
//!             - Error { title, message }
//!             - Help
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() / close()
//!
//!     数据流：
//!         用户按 e
//!             ↓
//!         update/content.rs 用当前标签页的表单打开 Modal::EditQuery
//!             ↓
//!         用户按 Enter
//!             ↓
//!         update/modal.rs 校验 limit/offset，调用 begin_query() 并交给 backend 执行
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{Modal, ModalState, ResultsState};
