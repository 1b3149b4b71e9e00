//! 服务标签页视图
//!
//! 从上到下：查询表单摘要、分页条、结果区。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Row as TableRow, Table, TableState, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use dfp_playground_core::Tab;

use crate::model::App;
use crate::view::components::pagination;
use crate::view::theme::{colors, Styles};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 渲染当前标签页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let tab = app.active_tab();
    let header = header_lines(tab);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(header.len()).unwrap_or(u16::MAX)), // 查询表单
            Constraint::Length(1),                   // 分页条
            Constraint::Length(1),                   // 空行
            Constraint::Min(1),                      // 结果
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header), chunks[0]);
    pagination::render(tab, frame, chunks[1]);
    render_results(app, tab, frame, chunks[3]);
}

/// 文档链接、子路由、where / limit / offset
fn header_lines(tab: &Tab) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![Line::from(vec![
        Span::styled("Docs   ", Styles::label()),
        Span::styled(
            tab.doc_link.clone(),
            Style::default()
                .fg(c.link)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])];

    let sub_routes = tab.descriptor.routes.sub_routes();
    if !sub_routes.is_empty() {
        let mut spans = vec![Span::styled("Route  ", Styles::label())];
        for sub in sub_routes {
            let span = if sub.route == tab.route {
                Span::styled(format!("[{}]", sub.label), Styles::selected())
            } else {
                Span::styled(format!(" {} ", sub.label), Style::default().fg(c.muted))
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("(r to switch)", Style::default().fg(c.muted)));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("Where  ", Styles::label()),
        Span::styled(tab.filter_clause.clone(), Style::default().fg(c.fg)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Limit  ", Styles::label()),
        Span::styled(tab.limit.to_string(), Style::default().fg(c.fg)),
        Span::styled("   Offset  ", Styles::label()),
        Span::styled(tab.offset.to_string(), Style::default().fg(c.fg)),
        Span::styled("   (e to edit)", Style::default().fg(c.muted)),
    ]));
    lines
}

fn render_results(app: &App, tab: &Tab, frame: &mut Frame, area: Rect) {
    let c = colors();

    if tab.loading {
        let spinner = SPINNER[app.tick % SPINNER.len()];
        let line = Line::styled(format!("{spinner} Loading..."), Style::default().fg(c.warning));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if tab.has_error() {
        let paragraph = Paragraph::new(Line::styled(
            tab.error_message.clone(),
            Style::default().fg(c.error),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    if tab.empty {
        let line = Line::styled("No results", Style::default().fg(c.muted));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if tab.results.is_empty() {
        let line = Line::styled(
            "Press e to edit the query, Enter to run it",
            Style::default().fg(c.muted),
        );
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let selected = app.results.selected(app.orchestrator.active_index());
    match tab.columns.as_deref() {
        Some(columns) if tab.descriptor.has_dynamic_columns() && !columns.is_empty() => {
            render_table(tab, columns, selected, frame, area);
        }
        _ => render_list(tab, selected, frame, area),
    }
}

/// 服务端给出列名的结果（PQL）
fn render_table(tab: &Tab, columns: &[String], selected: usize, frame: &mut Frame, area: Rect) {
    let count = u32::try_from(columns.len()).unwrap_or(u32::MAX);
    let cell_width = column_cell_width(area.width, columns.len());

    let header = TableRow::new(
        columns
            .iter()
            .map(|col| truncate(col, cell_width))
            .collect::<Vec<_>>(),
    )
    .style(Styles::label());

    let rows: Vec<TableRow> = tab
        .results
        .iter()
        .map(|row| {
            TableRow::new(
                tab.column_values(row)
                    .iter()
                    .map(|v| truncate(v, cell_width))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, count); columns.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 每列可用宽度，留一格列间距
fn column_cell_width(total: u16, columns: usize) -> usize {
    let columns = u16::try_from(columns).unwrap_or(u16::MAX).max(1);
    usize::from((total / columns).saturating_sub(1))
}

/// 其余服务：每行显示展示属性
fn render_list(tab: &Tab, selected: usize, frame: &mut Frame, area: Rect) {
    let c = colors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let label = tab.descriptor.display_attribute_label.unwrap_or("Row");
    let heading = format!("{label} ({} rows)", tab.results.len());
    frame.render_widget(Paragraph::new(Line::styled(heading, Styles::label())), chunks[0]);

    let width = usize::from(chunks[1].width.saturating_sub(2));
    let items: Vec<ListItem> = tab
        .results
        .iter()
        .map(|row| {
            let text = match tab.display_value(row) {
                Some(v) if !v.is_empty() => {
                    Span::styled(truncate(&v, width), Style::default().fg(c.fg))
                }
                // 缺少展示属性时退回紧凑 JSON
                _ => Span::styled(
                    truncate(&serde_json::Value::Object(row.clone()).to_string(), width),
                    Style::default().fg(c.muted),
                ),
            };
            ListItem::new(Line::from(vec![Span::raw("  "), text]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// 按显示宽度截断，超出时以 `…` 结尾
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_widths_split_evenly() {
        assert_eq!(column_cell_width(80, 4), 19);
        assert_eq!(column_cell_width(10, 0), 9);
        assert_eq!(column_cell_width(3, 100_000), 0);
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("adunit", 10), "adunit");
        assert_eq!(truncate("adunit", 4), "adu…");
        assert_eq!(truncate("广告单元名称", 5), "广告…");
        assert_eq!(truncate("anything", 0), "");
    }
}
