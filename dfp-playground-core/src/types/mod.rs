//! 类型定义模块

mod tab;

pub use tab::{value_text, QueryDefaults, Tab};

// Re-export API 库的公共类型
pub use dfp_playground_api::{Network, NetworkList, QueryParams, QueryResponse, Row};
