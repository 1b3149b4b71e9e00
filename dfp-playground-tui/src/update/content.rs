//! 标签页更新逻辑：结果选择、查询编辑、子路由和翻页

use crate::message::ContentMessage;
use crate::model::{App, Modal};

/// 处理标签页消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let index = app.orchestrator.active_index();
    let len = app.active_tab().results.len();

    match msg {
        ContentMessage::SelectPrevious => app.results.select_previous(index),
        ContentMessage::SelectNext => app.results.select_next(index, len),
        ContentMessage::SelectFirst => app.results.select_first(index),
        ContentMessage::SelectLast => app.results.select_last(index, len),
        ContentMessage::OpenRow => open_row(app, index),
        ContentMessage::EditQuery => {
            let modal = Modal::edit_query(index, app.active_tab());
            app.modal.show(modal);
        }
        ContentMessage::SwitchRoute => switch_route(app, index),
        ContentMessage::PrevPage => {
            let page = app.active_tab().current_page.saturating_sub(1);
            go_to_page(app, index, page);
        }
        ContentMessage::NextPage => {
            let page = app.active_tab().current_page + 1;
            go_to_page(app, index, page);
        }
        ContentMessage::GoToPage(page) => go_to_page(app, index, page),
    }
}

fn open_row(app: &mut App, index: usize) {
    let tab = app.active_tab();
    let row_index = app.results.selected(index);
    let Some(row) = tab.results.get(row_index) else {
        return;
    };

    let title = tab
        .display_value(row)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("{} #{}", tab.title, row_index + 1));
    let modal = Modal::row_detail(title, row);
    app.modal.show(modal);
}

/// 在双路由服务的子路由之间轮换
fn switch_route(app: &mut App, index: usize) {
    let tab = app.active_tab();
    let sub_routes = tab.descriptor.routes.sub_routes();
    if sub_routes.is_empty() {
        let title = tab.title;
        app.set_status(format!("{title} has a single route"));
        return;
    }

    let current = sub_routes
        .iter()
        .position(|s| s.route == tab.route)
        .unwrap_or(0);
    let next = sub_routes[(current + 1) % sub_routes.len()];

    match app.orchestrator.select_route(index, next.route) {
        Ok(_) => app.set_status(format!("Route: {}", next.label)),
        Err(e) => {
            log::warn!("Route switch failed: {e}");
            app.set_status(e.to_string());
        }
    }
}

fn go_to_page(app: &mut App, index: usize, page: usize) {
    if app.active_tab().pages.is_empty() {
        return;
    }
    // 越界、同一页或加载中时 begin_page 返回 None，什么都不做
    if let Some(pending) = app.orchestrator.begin_page(index, page) {
        app.results.reset(index);
        app.service.execute(pending);
    }
}
