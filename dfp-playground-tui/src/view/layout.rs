//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // 标签栏
            Constraint::Percentage(72), // 当前标签页
        ])
        .split(main_layout[1]);

    components::tab_strip::render(app, frame, columns[0]);
    render_tab_panel(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let network = match app.network().selected_network() {
        Some(network) => network.label(),
        None if app.networks_loading => "loading...".to_string(),
        None => "none selected (n)".to_string(),
    };

    let title = Line::from(vec![
        Span::raw(concat!(" DFP Playground v", env!("CARGO_PKG_VERSION"))),
        Span::raw("  │  Network: "),
        Span::raw(network),
    ]);
    frame.render_widget(Paragraph::new(title).style(style), area);
}

/// 当前标签页面板
fn render_tab_panel(app: &App, frame: &mut Frame, area: Rect) {
    let tab = app.active_tab();
    let block = Block::default()
        .title(format!(" {} ", tab.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_results()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    pages::service_tab::render(app, frame, inner);
}
