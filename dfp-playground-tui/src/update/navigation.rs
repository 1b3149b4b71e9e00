//! 标签栏更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理标签栏消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let current = app.orchestrator.active_index();
    let last = app.orchestrator.tabs().len().saturating_sub(1);

    let target = match msg {
        NavigationMessage::SelectPrevious => current.saturating_sub(1),
        NavigationMessage::SelectNext => (current + 1).min(last),
        NavigationMessage::SelectFirst => 0,
        NavigationMessage::SelectLast => last,
        NavigationMessage::Confirm => {
            app.focus = FocusPanel::Results;
            return;
        }
    };

    if target == current {
        return;
    }
    if let Err(e) = app.orchestrator.select_tab(target) {
        log::warn!("Cannot select tab {target}: {e}");
        return;
    }
    app.clear_status(); // 切换标签页时清除状态消息
}
