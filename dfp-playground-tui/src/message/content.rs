//! 标签页消息
//!
//! 结果列表的选择、查询编辑、翻页和子路由切换

/// 标签页消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 结果列表 ==========
    /// 上一行
    SelectPrevious,
    /// 下一行
    SelectNext,
    /// 第一行
    SelectFirst,
    /// 最后一行
    SelectLast,
    /// 展开当前行（JSON 详情）
    OpenRow,

    // ========== 查询 ==========
    /// 打开查询编辑弹窗
    EditQuery,
    /// 切换子路由（仅双路由服务）
    SwitchRoute,

    // ========== 分页 ==========
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,
    /// 跳到指定页（从 1 开始）
    GoToPage(usize),
}
