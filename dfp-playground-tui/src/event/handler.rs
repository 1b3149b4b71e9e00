//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 由下一轮绘制自动处理
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }

    // 根据焦点位置处理按键
    if app.focus.is_tab_strip() {
        handle_tab_strip_keys(key)
    } else {
        handle_results_keys(key)
    }
}

/// 全局快捷键（无论焦点在哪里）
fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::BACK.matches(key) {
        AppMessage::GoBack
    } else if DefaultKeymap::TOGGLE_FOCUS.matches(key) {
        AppMessage::ToggleFocus
    } else if DefaultKeymap::NETWORK_PICKER.matches(key) {
        AppMessage::ShowNetworkPicker
    } else if DefaultKeymap::RELOAD_NETWORKS.matches(key) {
        AppMessage::ReloadNetworks
    } else if DefaultKeymap::CREATE_TEST_NETWORK.matches(key) {
        AppMessage::ShowCreateTestNetwork
    } else if DefaultKeymap::EDIT_QUERY.matches(key) {
        AppMessage::Content(ContentMessage::EditQuery)
    } else if DefaultKeymap::SWITCH_ROUTE.matches(key) {
        AppMessage::Content(ContentMessage::SwitchRoute)
    } else if DefaultKeymap::PREV_PAGE.matches(key) || DefaultKeymap::PREV_PAGE_ARROW.matches(key)
    {
        AppMessage::Content(ContentMessage::PrevPage)
    } else if DefaultKeymap::NEXT_PAGE.matches(key) || DefaultKeymap::NEXT_PAGE_ARROW.matches(key)
    {
        AppMessage::Content(ContentMessage::NextPage)
    } else {
        return page_digit(key).map(|n| AppMessage::Content(ContentMessage::GoToPage(n)));
    };
    Some(msg)
}

/// 数字键 1-9 跳页
fn page_digit(key: &KeyEvent) -> Option<usize> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).and_then(|d| usize::try_from(d).ok()),
        _ => None,
    }
}

/// 处理标签栏的按键
fn handle_tab_strip_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个标签页
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一个标签页
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理结果区的按键
fn handle_results_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 展开当前行
        KeyCode::Enter => AppMessage::Content(ContentMessage::OpenRow),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::EditQuery { .. } => handle_edit_query_keys(key),
        Modal::NetworkPicker { .. } | Modal::RowDetail { .. } => handle_list_modal_keys(key),
        Modal::ConfirmTestNetwork { .. } => handle_confirm_keys(key),
        // 帮助和错误弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 查询编辑弹窗：where / limit / offset 三个输入框
fn handle_edit_query_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        // Enter: 提交查询
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        // 字符输入，允许 Shift（大写字母和符号）
        KeyCode::Char(ch) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 网络选择和行详情：↑↓ 移动或滚动，Enter 确认
fn handle_list_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::Up),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::Down),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 确认弹窗：Tab 或 ← → 切换按钮
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleButton)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
