//! 标签栏消息

/// 标签栏消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 上一个标签
    SelectPrevious,
    /// 下一个标签
    SelectNext,
    /// 第一个标签
    SelectFirst,
    /// 最后一个标签
    SelectLast,
    /// 进入当前标签的结果区
    Confirm,
}
