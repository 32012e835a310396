//! Header bar widget: application title, project name and view tabs.

use projhub_core::ViewKind;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the header bar.
///
/// ```text
/// ╭──────────────────────────────────────────────────────────────╮
/// │projhub - Web App v2.0           [1] Board [2] Table [3] Roadmap│
/// ╰──────────────────────────────────────────────────────────────╯
/// ```
pub fn render_header(project: &str, active: ViewKind, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let tabs = tab_line(active);
    let tabs_width = u16::try_from(tabs.width()).unwrap_or(u16::MAX);
    let [title_area, tabs_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(tabs_width)]).areas(inner);

    Paragraph::new(Line::from(vec![
        Span::styled(
            "projhub",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(project.to_string(), Style::default().fg(Color::White)),
    ]))
    .render(title_area, buf);

    Paragraph::new(tabs)
        .alignment(Alignment::Right)
        .render(tabs_area, buf);
}

fn tab_line(active: ViewKind) -> Line<'static> {
    let mut spans = Vec::new();
    for view in ViewKind::all() {
        if view.index() > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if view == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("[{}] {}", view.shortcut(), view.display_name()),
            style,
        ));
    }
    Line::from(spans)
}
