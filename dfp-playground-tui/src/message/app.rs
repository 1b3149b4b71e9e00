//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（标签栏 ↔ 结果区）
    ToggleFocus,

    /// 标签栏相关消息
    Navigation(NavigationMessage),

    /// 结果区相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Backend(BackendMessage),

    /// 关闭弹窗或返回标签栏
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 打开网络选择弹窗
    ShowNetworkPicker,

    /// 请求创建测试网络（先确认）
    ShowCreateTestNetwork,

    /// 重新加载网络列表（仅在上次加载失败后才会真正请求）
    ReloadNetworks,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
