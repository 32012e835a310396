//! Board rendering widget.
//!
//! The board shows one column per status, side by side with equal widths,
//! each holding a vertical stack of item cards.

use projhub_core::{Cursor, Group};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{HitRegion, card::render_card, scroll_offset};
use crate::layout::CARD_HEIGHT;

/// Renders the board columns and returns the hit region of every visible card.
///
/// The column holding the cursor gets a highlighted border. A column that
/// cannot show all of its cards scrolls so the selected card stays visible.
///
/// ```text
/// ╭Backlog (3)─╮╭In Progress─╮╭Review (1)──╮╭Done (2)────╮
/// │╭──────────╮││╭──────────╮││╭──────────╮││╭──────────╮│
/// ││#123      ││││#126      ││││#128      ││││#129      ││
/// ```
pub fn render_board(
    groups: &[Group<'_>],
    cursor: Cursor,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<HitRegion> {
    if groups.is_empty() {
        return Vec::new();
    }

    let columns = Layout::horizontal(groups.iter().map(|_| Constraint::Fill(1))).split(area);
    let selected = match cursor {
        Cursor::Grouped { group, offset } => Some((group, offset)),
        _ => None,
    };

    let mut hits = Vec::new();
    for (index, (group, column_area)) in groups.iter().zip(columns.iter()).enumerate() {
        let selected_offset = selected
            .filter(|(g, _)| *g == index)
            .map(|(_, offset)| offset);
        hits.extend(render_column(index, group, selected_offset, *column_area, buf));
    }
    hits
}

fn render_column(
    index: usize,
    group: &Group<'_>,
    selected_offset: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<HitRegion> {
    let is_focused = selected_offset.is_some();
    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .title(Span::styled(
            format!("{} ({})", group.label(), group.len()),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    if group.is_empty() {
        Paragraph::new(Span::styled(
            "No items",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(inner, buf);
        return Vec::new();
    }

    let capacity = usize::from(inner.height / CARD_HEIGHT);
    let first = scroll_offset(selected_offset, capacity);

    let mut hits = Vec::new();
    for (slot, (offset, item)) in group
        .items
        .iter()
        .enumerate()
        .skip(first)
        .take(capacity)
        .enumerate()
    {
        let y = inner.y + CARD_HEIGHT * u16::try_from(slot).unwrap_or(u16::MAX);
        let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        render_card(item, selected_offset == Some(offset), card_area, buf);
        hits.push(HitRegion {
            area: card_area,
            group: index,
            offset,
        });
    }
    hits
}
