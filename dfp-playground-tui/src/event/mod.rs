//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射与帮助文字
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 下一轮循环自动重绘
//!             其他                                 // 忽略
//!
//!             键盘事件的处理顺序：
//!                 1. 有弹窗打开时，全部交给 handle_modal_keys
//!                    （查询编辑弹窗需要接收 q、e、r 等普通字母）
//!                 2. 全局快捷键：退出、帮助、焦点、网络、查询编辑、翻页
//!                    翻页和子路由作用于当前标签页，与焦点无关
//!                 3. 焦点在标签栏：↑↓ 切换标签页
//!                    焦点在结果区：↑↓ 选择行，Enter 展开
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Tab              → AppMessage::ToggleFocus
//!         ↑↓ / j k         → SelectPrevious / SelectNext
//!         e                → ContentMessage::EditQuery
//!         r                → ContentMessage::SwitchRoute
//!         ← → / [ ]        → ContentMessage::PrevPage / NextPage
//!         1-9              → ContentMessage::GoToPage(n)
//!         n                → AppMessage::ShowNetworkPicker
//!         Alt+r            → AppMessage::ReloadNetworks
//!         Alt+t            → AppMessage::ShowCreateTestNetwork
//!         ?                → AppMessage::ShowHelp
//!         Esc              → AppMessage::GoBack / ModalMessage::Close
//!         q / Ctrl+C       → AppMessage::Quit
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::HELP_ENTRIES;
