//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台结果处理
//!         mod content;            // 标签页子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 标签栏子消息处理
//!
//!
//!     需要网络请求的消息不会在这里等待结果：
//!         1. 先调用 TabOrchestrator::begin_*()，标签页立即进入 loading
//!         2. 把 PendingRequest 交给 PlaygroundService::execute()
//!         3. 结果以 AppMessage::Backend(..) 的形式在之后的某一轮主循环回到这里
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.focus.is_results() {
                app.focus = FocusPanel::TabStrip;
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowNetworkPicker => show_network_picker(app),

        AppMessage::ShowCreateTestNetwork => {
            if app.networks_loading {
                app.set_status("Networks are loading, try again in a moment");
            } else {
                app.modal.show_confirm_test_network();
            }
        }

        AppMessage::ReloadNetworks => {
            if app.networks_loading {
                app.set_status("Networks are already loading");
            } else {
                app.load_networks();
            }
        }

        AppMessage::Noop => {}
    }
}

fn show_network_picker(app: &mut App) {
    let networks = app.network().networks();
    if networks.is_empty() {
        let status = if app.networks_loading {
            "Networks are still loading"
        } else {
            "No networks loaded. Alt+r to retry, Alt+t to create a test network"
        };
        app.set_status(status);
        return;
    }

    let code = app.network().selected_code();
    let selected = networks
        .iter()
        .position(|n| n.network_code == code)
        .unwrap_or(0);
    app.modal.show_network_picker(selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modal;
    use crate::test_utils::test_app;

    #[test]
    fn go_back_closes_modal_then_leaves_results() {
        let (_rt, mut app) = test_app(&["1"]);
        app.focus = FocusPanel::Results;
        app.modal.show_help();

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert_eq!(app.focus, FocusPanel::Results);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::TabStrip);
    }

    #[test]
    fn focus_does_not_move_under_modal() {
        let (_rt, mut app) = test_app(&["1"]);
        app.modal.show_help();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::TabStrip);
    }

    #[test]
    fn network_picker_highlights_selection() {
        let (_rt, mut app) = test_app(&["1", "2", "3"]);
        app.network().select("3");
        update(&mut app, AppMessage::ShowNetworkPicker);
        assert_eq!(app.modal.active, Some(Modal::NetworkPicker { selected: 2 }));
    }

    #[test]
    fn network_picker_needs_networks() {
        let (_rt, mut app) = test_app(&[]);
        update(&mut app, AppMessage::ShowNetworkPicker);
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let (_rt, mut app) = test_app(&["1"]);
        app.networks_loading = true;
        update(&mut app, AppMessage::ReloadNetworks);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Networks are already loading")
        );
    }

    #[test]
    fn quit_sets_flag() {
        let (_rt, mut app) = test_app(&[]);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
