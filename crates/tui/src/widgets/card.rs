//! Item card rendering widget.

use projhub_core::Item;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::priority_color;

/// Renders an item card: id and assignee on the first line, title on the
/// second, inside a border colored by priority.
///
/// ```text
/// ╭──────────────╮
/// │#123 @tanaka  │
/// │User authenti…│
/// ╰──────────────╯
/// ```
pub fn render_card(item: &Item, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_style, id_style, title_style) = if is_selected {
        (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(priority_color(item.priority)),
            Style::default().fg(Color::White),
            Style::default().fg(Color::Gray),
        )
    };

    let mut first = vec![Span::styled(item.id.as_str(), id_style)];
    if let Some(assignee) = &item.assignee {
        first.push(Span::raw(" "));
        first.push(Span::styled(
            assignee.as_str(),
            Style::default().fg(Color::Magenta),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    Paragraph::new(vec![
        Line::from(first),
        Line::from(Span::styled(item.title.as_str(), title_style)),
    ])
    .block(block)
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::NaiveDate;
    use projhub_core::Status;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn card_shows_id_assignee_and_title() {
        let item = Item::new("#7", "Fix login", Status::Review, date())
            .with_assignee("@sato");
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        render_card(&item, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("#7 @sato"));
        assert!(content.contains("Fix login"));
    }

    #[test]
    fn card_skips_tiny_area() {
        let item = Item::new("#7", "Fix login", Status::Review, date());
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        render_card(&item, true, area, &mut buf);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }
}
