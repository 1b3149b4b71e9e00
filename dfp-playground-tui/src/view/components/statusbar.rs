//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在快捷键之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(colors().selected_fg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Panel")];

    match app.focus {
        FocusPanel::TabStrip => {
            hints.push(("↑↓", "Service"));
        }
        FocusPanel::Results => {
            hints.push(("↑↓", "Row"));
            hints.push(("Enter", "Details"));
        }
    }

    hints.push(("e", "Query"));
    let tab = app.active_tab();
    if !tab.descriptor.routes.sub_routes().is_empty() {
        hints.push(("r", "Route"));
    }
    if tab.page_count() > 1 {
        hints.push(("←→", "Page"));
    }
    hints.push(("n", "Network"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
