//! Item detail overlay widget.
//!
//! Shows every field of the selected item in a centered panel on top of
//! the active view.

use projhub_core::{Item, ProjectSnapshot, progress_bar};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::help::centered_rect;
use super::{priority_color, status_color};

/// The width of the detail panel.
const DETAIL_WIDTH: u16 = 56;

/// The height of the detail panel.
const DETAIL_HEIGHT: u16 = 14;

/// Renders a centered panel with the details of `item`.
///
/// ```text
/// ╭ #123 ────────────────────────────────────────────────╮
/// │                                                      │
/// │  User authentication                                 │
/// │                                                      │
/// │  Status     Backlog                                  │
/// │  Priority   High                                     │
/// │  Assignee   @tanaka                                  │
/// │  Sprint     Sprint 1  2024-12-01 → 2024-12-15        │
/// │  Progress   █████░░░░░  50%                          │
/// │  Updated    2024-12-01                               │
/// │                                                      │
/// │  o / Esc Close                                       │
/// ╰──────────────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use projhub_core::dummy;
/// use projhub_tui::widgets::render_detail_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let snapshot = dummy::sample_snapshot().unwrap();
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_detail_overlay(&snapshot, &snapshot.items()[0], area, &mut buf);
/// ```
pub fn render_detail_overlay(
    snapshot: &ProjectSnapshot,
    item: &Item,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup_area = centered_rect(DETAIL_WIDTH, DETAIL_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", item.id),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    Paragraph::new(build_detail_lines(snapshot, item))
        .block(block)
        .wrap(Wrap { trim: false })
        .render(popup_area, buf);
}

fn build_detail_lines(snapshot: &ProjectSnapshot, item: &Item) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::Gray);
    let muted = Style::default().fg(Color::DarkGray);
    let field = |label: &'static str, value: Span<'static>| {
        Line::from(vec![Span::styled(format!("  {label:<11}"), label_style), value])
    };

    let assignee = match &item.assignee {
        Some(name) => Span::styled(name.clone(), Style::default().fg(Color::Magenta)),
        None => Span::styled("Unassigned", muted),
    };

    let sprint = match item.sprint.as_deref() {
        Some(name) => {
            let dates = snapshot
                .sprint(name)
                .and_then(|sprint| sprint.start.zip(sprint.end))
                .map(|(start, end)| format!("  {start} → {end}"))
                .unwrap_or_default();
            Span::styled(format!("{name}{dates}"), Style::default().fg(Color::Cyan))
        }
        None => Span::styled("Unassigned", muted),
    };

    let percent = snapshot.progress_of(item);

    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", item.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field(
            "Status",
            Span::styled(
                item.status.display_name(),
                Style::default().fg(status_color(item.status)),
            ),
        ),
        field(
            "Priority",
            Span::styled(
                item.priority.display_name(),
                Style::default().fg(priority_color(item.priority)),
            ),
        ),
        field("Assignee", assignee),
        field("Sprint", sprint),
        Line::from(vec![
            Span::styled(format!("  {:<11}", "Progress"), label_style),
            Span::styled(progress_bar(percent), Style::default().fg(Color::Green)),
            Span::raw(format!(" {percent:>3}%")),
        ]),
        field("Updated", Span::raw(item.updated_at.to_string())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  o / Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Close", muted.add_modifier(Modifier::ITALIC)),
        ]),
    ]
}
