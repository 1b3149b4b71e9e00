//! 页面视图

pub mod service_tab;
