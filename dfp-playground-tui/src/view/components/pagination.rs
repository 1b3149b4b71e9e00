//! 分页条组件
//!
//! 每个页码一个按钮，当前页高亮；页数多时只显示当前页附近的页码。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use dfp_playground_core::Tab;

use crate::view::theme::{colors, Styles};

/// 当前页两侧各显示的页码数
const WINDOW: usize = 4;

/// 渲染分页条；没有分页计划时显示为空行
pub fn render(tab: &Tab, frame: &mut Frame, area: Rect) {
    let count = tab.page_count();
    if count == 0 {
        return;
    }

    let c = colors();
    let current = tab.current_page;
    let (first, last) = visible_range(current, count);

    let mut spans = vec![Span::styled("Pages ", Styles::label())];
    if first > 1 {
        spans.push(Span::styled("… ", Style::default().fg(c.muted)));
    }
    for page in first..=last {
        if page == current {
            spans.push(Span::styled(format!("[{page}]"), Styles::selected()));
        } else {
            spans.push(Span::styled(format!(" {page} "), Style::default().fg(c.fg)));
        }
        spans.push(Span::raw(" "));
    }
    if last < count {
        spans.push(Span::styled("…", Style::default().fg(c.muted)));
    }
    spans.push(Span::styled(
        format!("  page {current} of {count}"),
        Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 要显示的页码区间（闭区间，从 1 开始）
fn visible_range(current: usize, count: usize) -> (usize, usize) {
    let first = current.saturating_sub(WINDOW).max(1);
    let last = (current + WINDOW).min(count);
    (first, last)
}
