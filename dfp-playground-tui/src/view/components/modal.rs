//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::event::HELP_ENTRIES;
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::EditQuery { .. } => render_edit_query(app, frame, modal),
        Modal::NetworkPicker { selected } => render_network_picker(app, frame, *selected),
        Modal::RowDetail {
            title,
            body,
            scroll,
        } => render_row_detail(frame, title, body, *scroll),
        Modal::ConfirmTestNetwork { focus } => render_confirm_test_network(frame, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制弹窗边框，返回内容区域
fn popup(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染查询编辑弹窗
fn render_edit_query(app: &App, frame: &mut Frame, modal: &Modal) {
    let Modal::EditQuery {
        tab,
        filter_clause,
        limit,
        offset,
        focus,
        error,
    } = modal
    else {
        return;
    };

    let c = colors();
    let title = app
        .orchestrator
        .tab(*tab)
        .map_or("Query", |t| t.title);
    let area = centered_rect(70, 14, frame.area());
    let inner = popup(frame, area, title, c.border_focused);

    let fields = [
        ("Where", filter_clause.as_str()),
        ("Limit", limit.as_str()),
        ("Offset", offset.as_str()),
    ];

    let mut lines = Vec::new();
    for (i, (label, value)) in fields.iter().enumerate() {
        let focused = i == *focus;
        lines.push(Line::styled(*label, Style::default().fg(c.muted)));
        let (text, style) = if focused {
            (format!("  {value}▎"), Style::default().fg(c.border_focused))
        } else {
            (format!("  {value}"), Style::default().fg(c.fg))
        };
        lines.push(Line::styled(text, style));
        lines.push(Line::from(""));
    }

    match error {
        Some(err) => lines.push(Line::styled(err.clone(), Style::default().fg(c.error))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Styles::hint_key()),
        Span::styled(" run  ", Style::default().fg(c.muted)),
        Span::styled("Tab", Styles::hint_key()),
        Span::styled(" next field  ", Style::default().fg(c.muted)),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(" cancel", Style::default().fg(c.muted)),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染网络选择弹窗
fn render_network_picker(app: &App, frame: &mut Frame, selected: usize) {
    let c = colors();
    let networks = app.network().networks();
    let current = app.network().selected_code();

    let height = u16::try_from(networks.len()).unwrap_or(u16::MAX).saturating_add(4).min(20);
    let area = centered_rect(60, height, frame.area());
    let inner = popup(frame, area, "Select Network", c.border_focused);

    let items: Vec<ListItem> = networks
        .iter()
        .map(|network| {
            let mark = if network.network_code == current { "● " } else { "  " };
            let test = if network.is_test == Some(true) { "  [test]" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(c.success)),
                Span::raw(network.label()),
                Span::styled(test, Style::default().fg(c.muted)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, inner, &mut state);
}

/// 渲染单行结果详情
fn render_row_detail(frame: &mut Frame, title: &str, body: &str, scroll: u16) {
    let c = colors();
    let screen = frame.area();
    let area = centered_rect(screen.width * 4 / 5, screen.height * 4 / 5, screen);
    let inner = popup(frame, area, title, c.border_focused);

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(c.fg))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// 渲染测试网络确认弹窗
fn render_confirm_test_network(frame: &mut Frame, focus: usize) {
    let c = colors();
    let area = centered_rect(52, 9, frame.area());
    let inner = popup(frame, area, "Create Test Network", c.warning);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(c.fg)
    } else {
        Style::default().fg(c.fg)
    };
    let create_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.success)
    } else {
        Style::default().fg(c.success)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Create a new test network for this account?",
            Style::default().fg(c.fg),
        ),
        Line::styled(
            "The network list is reloaded afterwards.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Create ", create_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 8, frame.area());
    let inner = popup(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let height = u16::try_from(HELP_ENTRIES.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(58, height, frame.area());
    let inner = popup(frame, area, "Help", c.border_focused);

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
