//! 可复用的 UI 组件

pub mod modal;
pub mod pagination;
pub mod statusbar;
pub mod tab_strip;
