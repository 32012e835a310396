//! Status bar widget with key hints and the current selection.

use projhub_core::{ViewFrame, ViewKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the status bar.
///
/// Key hints go on the left; the selected item and its position within
/// the view go on the right.
pub fn render_status_bar(frame: &ViewFrame<'_>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let mut hints = vec![
        Span::styled("1-3", key_style),
        Span::styled(" View  ", text_style),
    ];
    // Left and right only move between board columns.
    if frame.view == ViewKind::Board {
        hints.push(Span::styled("hjkl/←↓↑→", key_style));
    } else {
        hints.push(Span::styled("jk/↓↑", key_style));
    }
    hints.extend([
        Span::styled(" Move  ", text_style),
        Span::styled("o", key_style),
        Span::styled(" Detail  ", text_style),
        Span::styled("?", key_style),
        Span::styled(" Help  ", text_style),
        Span::styled("q", key_style),
        Span::styled(" Quit", text_style),
    ]);

    let selection = match (frame.selected_item(), frame.cursor.position()) {
        (Some(item), Some((group, offset))) => {
            let within = frame.projection.group_len(group).unwrap_or(0);
            format!("{} {}/{}", item.id, offset + 1, within)
        }
        _ => "No selection".to_string(),
    };

    let [hints_area, selection_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(inner);
    Paragraph::new(Line::from(hints)).render(hints_area, buf);
    Paragraph::new(Span::styled(selection, Style::default().fg(Color::Cyan)))
        .alignment(Alignment::Right)
        .render(selection_area, buf);
}
