//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::state::{parse_count, QUERY_FIELD_COUNT};
use crate::model::{App, FocusPanel, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close) {
        app.modal.close();
        return;
    }

    match app.modal.active {
        Some(Modal::EditQuery { .. }) => update_edit_query(app, msg),
        Some(Modal::NetworkPicker { .. }) => update_network_picker(app, msg),
        Some(Modal::RowDetail { .. }) => update_row_detail(app, msg),
        Some(Modal::ConfirmTestNetwork { .. }) => update_confirm_test_network(app, msg),
        Some(Modal::Error { .. } | Modal::Help) => {
            if matches!(msg, ModalMessage::Confirm) {
                app.modal.close();
            }
        }
        None => {}
    }
}

fn update_row_detail(app: &mut App, msg: ModalMessage) {
    let Some(Modal::RowDetail { scroll, .. }) = app.modal.active.as_mut() else {
        return;
    };
    match msg {
        ModalMessage::Up => *scroll = scroll.saturating_sub(1),
        ModalMessage::Down => *scroll = scroll.saturating_add(1),
        ModalMessage::Confirm => app.modal.close(),
        _ => {}
    }
}

fn update_confirm_test_network(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmTestNetwork { focus }) = app.modal.active.as_mut() else {
        return;
    };
    match msg {
        ModalMessage::ToggleButton | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = 1 - *focus;
        }
        ModalMessage::Confirm => {
            let create = *focus == 1;
            app.modal.close();
            if create {
                app.networks_loading = true;
                app.set_status("Creating test network...");
                app.service.create_test_network();
            }
        }
        _ => {}
    }
}

fn update_edit_query(app: &mut App, msg: ModalMessage) {
    let Some(Modal::EditQuery {
        tab,
        filter_clause,
        limit,
        offset,
        focus,
        error,
    }) = app.modal.active.as_mut()
    else {
        return;
    };

    match msg {
        ModalMessage::NextField | ModalMessage::Down => {
            *focus = (*focus + 1) % QUERY_FIELD_COUNT;
        }
        ModalMessage::PrevField | ModalMessage::Up => {
            *focus = (*focus + QUERY_FIELD_COUNT - 1) % QUERY_FIELD_COUNT;
        }
        ModalMessage::Input(c) => {
            match *focus {
                0 => filter_clause.push(c),
                1 => limit.push(c),
                _ => offset.push(c),
            }
            *error = None;
        }
        ModalMessage::Backspace => {
            match *focus {
                0 => filter_clause.pop(),
                1 => limit.pop(),
                _ => offset.pop(),
            };
            *error = None;
        }
        ModalMessage::Confirm => {
            let parsed = parse_count("limit", limit)
                .and_then(|l| parse_count("offset", offset).map(|o| (l, o)));
            let (limit, offset) = match parsed {
                Ok(counts) => counts,
                Err(e) => {
                    *error = Some(e);
                    return;
                }
            };
            let index = *tab;
            let clause = filter_clause.clone();
            submit_query(app, index, &clause, limit, offset);
        }
        _ => {}
    }
}

fn submit_query(app: &mut App, index: usize, clause: &str, limit: u32, offset: u32) {
    match app.orchestrator.begin_query(index, clause, limit, offset) {
        Ok(pending) => {
            app.modal.close();
            app.results.reset(index);
            app.focus = FocusPanel::Results;
            app.clear_status();
            app.service.execute(pending);
        }
        Err(e) => {
            log::error!("Cannot start query: {e}");
            if let Some(Modal::EditQuery { error, .. }) = app.modal.active.as_mut() {
                *error = Some(e.to_string());
            }
        }
    }
}

fn update_network_picker(app: &mut App, msg: ModalMessage) {
    let networks = app.network().networks();
    let Some(Modal::NetworkPicker { selected }) = app.modal.active.as_mut() else {
        return;
    };

    match msg {
        ModalMessage::Up => *selected = selected.saturating_sub(1),
        ModalMessage::Down => {
            if *selected + 1 < networks.len() {
                *selected += 1;
            }
        }
        ModalMessage::Confirm => {
            let choice = networks.get(*selected).cloned();
            app.modal.close();
            if let Some(network) = choice {
                app.network().select(network.network_code.clone());
                app.set_status(format!("Network: {}", network.label()));
            }
        }
        _ => {}
    }
}
