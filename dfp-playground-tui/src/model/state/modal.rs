//! 弹窗/对话框状态

use dfp_playground_api::Row;
use dfp_playground_core::Tab;

/// 查询编辑弹窗的字段数（where / limit / offset）
pub const QUERY_FIELD_COUNT: usize = 3;

/// 弹窗枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 编辑并提交查询
    EditQuery {
        /// 目标标签页
        tab: usize,
        filter_clause: String,
        limit: String,
        offset: String,
        /// 0 = where, 1 = limit, 2 = offset
        focus: usize,
        error: Option<String>,
    },

    /// 选择网络
    NetworkPicker {
        /// 当前高亮的网络
        selected: usize,
    },

    /// 单行结果的 JSON 详情
    RowDetail {
        title: String,
        body: String,
        scroll: u16,
    },

    /// 确认创建测试网络
    ConfirmTestNetwork {
        /// 0 = Cancel, 1 = Create
        focus: usize,
    },

    /// 错误提示
    Error { title: String, message: String },

    /// 帮助
    Help,
}

impl Modal {
    /// 由标签页当前表单预填的查询编辑弹窗
    pub fn edit_query(index: usize, tab: &Tab) -> Self {
        Self::EditQuery {
            tab: index,
            filter_clause: tab.filter_clause.clone(),
            limit: tab.limit.to_string(),
            offset: tab.offset.to_string(),
            focus: 0,
            error: None,
        }
    }

    /// 行详情弹窗，内容为格式化的 JSON
    pub fn row_detail(title: impl Into<String>, row: &Row) -> Self {
        let body = serde_json::to_string_pretty(row).unwrap_or_else(|e| format!("{e}"));
        Self::RowDetail {
            title: title.into(),
            body,
            scroll: 0,
        }
    }
}

/// 解析查询编辑弹窗中的 limit / offset
pub fn parse_count(field: &str, value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{field} must be a non-negative integer"))
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示网络选择弹窗，高亮 `selected`
    pub fn show_network_picker(&mut self, selected: usize) {
        self.active = Some(Modal::NetworkPicker { selected });
    }

    /// 显示测试网络确认弹窗（默认焦点在 Cancel）
    pub fn show_confirm_test_network(&mut self) {
        self.active = Some(Modal::ConfirmTestNetwork { focus: 0 });
    }
}
