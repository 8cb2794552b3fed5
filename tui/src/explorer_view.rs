//! Thin rendering adapter for the explorer pane: the search box and the
//! flattened tree rows. All decisions about what is visible were already
//! made by `filter`/`rows`; this module only maps rows to styled lines.

use crate::rows::ExplorerRow;
use crate::rows::RowKind;
use crate::tree::NodeKey;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use unicode_width::UnicodeWidthStr;

pub(crate) fn render_search(frame: &mut Frame, area: Rect, query: &str) {
    let block = Block::default().borders(Borders::ALL).title(" Search ");
    let content = if query.is_empty() {
        Line::from("type to filter…".dim())
    } else {
        Line::from(vec![Span::raw(query.to_string()), Span::raw("▏").dim()])
    };
    frame.render_widget(ratatui::widgets::Paragraph::new(content).block(block), area);
}

pub(crate) fn render_tree(
    frame: &mut Frame,
    area: Rect,
    rows: &[ExplorerRow],
    cursor: usize,
    active: Option<&NodeKey>,
) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, active, width)))
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Explorer ");
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().reversed());

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_line(row: &ExplorerRow, active: Option<&NodeKey>, width: usize) -> Line<'static> {
    let is_active = active == Some(&row.key);
    let label = truncated(&row.label, width);
    let mut line = match row.kind {
        RowKind::FileHeader { expanded } => {
            let chevron = if expanded { "▾ " } else { "▸ " };
            Line::from(vec![Span::raw(chevron), Span::raw(label).bold()])
        }
        RowKind::Symbol => Line::from(vec![Span::raw("    "), Span::raw(label)]),
    };
    if is_active {
        line = line.cyan().bold();
    }
    line
}

fn truncated(label: &str, width: usize) -> String {
    if label.width() <= width || width == 0 {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        if out.width() + 1 >= width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
