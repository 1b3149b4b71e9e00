//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          │ BackendMsg│   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀────────┴─读取──────┴───┘      └────┬─────┘         │   │
//！│  │        │                     ▲                     │               │   │
//！│  └────────│─────────────────────│─────────────────────│───────────────┘   │
//！│           │                     │ mpsc                │ spawn             │
//！│           ▼                     │                     ▼                   │
//！│      ┌─────────┐                │               ┌──────────┐              │
//！│      │  终端   │                └────────────── │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ dfp-playground-   │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod backend;        // 后台请求完成的消息
//!         mod content;        // 标签页（结果区）的子消息
//!         mod modal;          // 弹窗的子消息
//!         mod navigation;     // 标签栏的子消息
//!
//!
//!     消息有两个来源：
//!
//!         1. 键盘：event/handler.rs 的 handle_event() 把按键翻译成 AppMessage
//!
//!         2. 后台：backend 层 spawn 的请求在完成后，通过 mpsc 通道发送
//!            BackendMessage，主循环每一轮把通道里的消息取出，
//!            包装成 AppMessage::Backend(..) 交给 Update 层
//!
//!
//!     BackendMessage::QueryCompleted 携带发起请求时得到的 PendingRequest，
//!     Update 层把它连同结果交回 TabOrchestrator::complete()。
//!     响应按到达顺序处理：同一标签页上后到的响应会覆盖先到的。
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
