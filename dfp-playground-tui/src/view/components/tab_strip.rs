//! 左侧服务标签栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染标签栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Services ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_tab_strip()));

    let active = app.orchestrator.active_index();
    let items: Vec<ListItem> = app
        .orchestrator
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let is_selected = i == active;
            let prefix = if is_selected { "▶ " } else { "  " };

            // 加载中 / 出错的标签页带一个标记
            let marker = if tab.loading {
                Span::styled(" …", Style::default().fg(c.warning))
            } else if tab.has_error() {
                Span::styled(" !", Style::default().fg(c.error))
            } else {
                Span::raw("")
            };

            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix}{}", tab.title), style),
                marker,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(active));

    frame.render_stateful_widget(list, area, &mut state);
}
