//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态，每轮主循环整屏重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 标签栏、分页条、状态栏、弹窗
//!         mod layout;         // 主布局
//!         mod pages;          // 服务标签页
//!         pub mod theme;      // 主题与样式
//!
//!
//!     屏幕布局：
//!         ┌──────────────────────────────────────────────────────────┐
//!         │ 标题栏：应用名 + 当前网络                                  │
//!         ├──────────────┬───────────────────────────────────────────┤
//!         │ 标签栏        │ 文档链接 / 子路由 / where / limit / offset  │
//!         │ (28%)        │ 分页条                                     │
//!         │              │ 结果（PQL 为表格，其余为列表）               │
//!         ├──────────────┴───────────────────────────────────────────┤
//!         │ 状态栏：快捷键提示 + 状态消息                               │
//!         └──────────────────────────────────────────────────────────┘
//!         弹窗绘制在最上层
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
