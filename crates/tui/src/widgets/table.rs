//! Table rendering widget.

use projhub_core::{Cursor, Item};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};

use super::{HitRegion, priority_color, scroll_offset, status_color};

/// Column headings, in display order.
const HEADINGS: [&str; 6] = ["ID", "Title", "Status", "Assignee", "Priority", "Updated"];

/// Renders the item table and returns the hit region of every visible row.
///
/// Rows keep snapshot order. When the rows do not fit, the table scrolls so
/// the selected row stays visible.
pub fn render_table(
    rows: &[&Item],
    cursor: Cursor,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<HitRegion> {
    let block = Block::default()
        .title(Span::styled(
            format!("Items ({})", rows.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let selected = match cursor {
        Cursor::Flat { row } => Some(row),
        _ => None,
    };
    // One line is taken by the heading row.
    let visible = usize::from(inner.height.saturating_sub(1));
    let first = scroll_offset(selected, visible);

    let header = Row::new(HEADINGS).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let mut hits = Vec::new();
    let body: Vec<Row<'_>> = rows
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(index, item)| {
            let slot = u16::try_from(index - first).unwrap_or(u16::MAX);
            hits.push(HitRegion {
                area: Rect::new(inner.x, inner.y + 1 + slot, inner.width, 1),
                group: 0,
                offset: index,
            });
            item_row(item, selected == Some(index))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
    ];
    Table::new(body, widths).header(header).render(inner, buf);

    hits
}

fn item_row(item: &Item, is_selected: bool) -> Row<'_> {
    let cells = [
        Cell::from(item.id.as_str()),
        Cell::from(item.title.as_str()),
        Cell::from(Line::from(Span::styled(
            item.status.display_name(),
            Style::default().fg(status_color(item.status)),
        ))),
        Cell::from(Line::from(Span::styled(
            item.assignee.as_deref().unwrap_or("-"),
            Style::default().fg(Color::Magenta),
        ))),
        Cell::from(Line::from(Span::styled(
            item.priority.display_name(),
            Style::default().fg(priority_color(item.priority)),
        ))),
        Cell::from(Line::from(Span::styled(
            item.updated_at.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::DarkGray),
        ))),
    ];

    let row = Row::new(cells);
    if is_selected {
        row.style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
    } else {
        row
    }
}
