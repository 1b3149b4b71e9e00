//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 列表上移 / 详情向上滚动
    Up,

    /// 列表下移 / 详情向下滚动
    Down,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换按钮
    ToggleButton,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
