//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧服务标签栏
    #[default]
    TabStrip,
    /// 右侧结果区
    Results,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            Self::TabStrip => Self::Results,
            Self::Results => Self::TabStrip,
        }
    }

    pub fn is_tab_strip(self) -> bool {
        matches!(self, Self::TabStrip)
    }

    pub fn is_results(self) -> bool {
        matches!(self, Self::Results)
    }
}
