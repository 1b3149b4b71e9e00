//! 页面数据状态

mod modal;
mod results;

pub use modal::{parse_count, Modal, ModalState, QUERY_FIELD_COUNT};
pub use results::ResultsState;
