//! Roadmap rendering widget.
//!
//! The roadmap is a single scrolling list: a timeline banner, then each
//! sprint group with one progress row per item, then an overview of the
//! average progress of every group.
//!
//! ```text
//! Timeline: Sprint 1 - Sprint 2  (2024-12-01 → 2024-12-31)
//!
//! Sprint 1  2024-12-01 → 2024-12-15
//!   █████░░░░░  50%  #123 User authentication
//!   ███████░░░  70%  #126 Implement TUI design
//!
//! Sprint Progress Overview:
//!   Sprint 1     ██████░░░░  60%
//! ```

use chrono::NaiveDate;
use projhub_core::{
    Cursor, Group, GroupKey, ProjectSnapshot, average_progress, progress_bar, timeline_span,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{HitRegion, scroll_offset};

/// Formats a date range the way the roadmap shows it.
fn date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} → {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
}

/// Builds the timeline banner line.
fn banner(snapshot: &ProjectSnapshot, groups: &[Group<'_>]) -> Line<'static> {
    let title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let declared = snapshot.sprints();
    let ends = match (declared.first(), declared.last()) {
        (Some(first), Some(last)) => Some((first.name.as_str(), last.name.as_str())),
        _ => groups.first().zip(groups.last()).map(|(f, l)| (f.label(), l.label())),
    };
    let Some((first, last)) = ends else {
        return Line::from(Span::styled("Timeline: no sprints", title_style));
    };

    let mut spans = vec![Span::styled(
        format!("Timeline: {first} - {last}"),
        title_style,
    )];
    if let Some((start, end)) = timeline_span(snapshot) {
        spans.push(Span::styled(
            format!("  ({})", date_range(start, end)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn group_heading(snapshot: &ProjectSnapshot, group: &Group<'_>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        group.label().to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    let dates = match &group.key {
        GroupKey::Sprint(name) => snapshot
            .sprint(name)
            .and_then(|sprint| Some(date_range(sprint.start?, sprint.end?))),
        _ => None,
    };
    if let Some(dates) = dates {
        spans.push(Span::styled(
            format!("  {dates}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Renders the roadmap and returns the hit region of every visible item row.
///
/// The list scrolls so the selected row stays visible.
pub fn render_roadmap(
    snapshot: &ProjectSnapshot,
    groups: &[Group<'_>],
    cursor: Cursor,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<HitRegion> {
    let block = Block::default()
        .title(Span::styled(
            " Roadmap ",
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
        Cursor::Grouped { group, offset } => Some((group, offset)),
        _ => None,
    };

    let mut lines = vec![banner(snapshot, groups)];
    // (line index, group, offset) for every item row.
    let mut targets = Vec::new();
    let mut selected_line = None;

    for (index, group) in groups.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(group_heading(snapshot, group));
        if group.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (no items)",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        for (offset, item) in group.items.iter().enumerate() {
            let is_selected = selected == Some((index, offset));
            if is_selected {
                selected_line = Some(lines.len());
            }
            targets.push((lines.len(), index, offset));

            let percent = snapshot.progress_of(item);
            let mut line = Line::from(vec![
                Span::raw("  "),
                Span::styled(progress_bar(percent), Style::default().fg(Color::Green)),
                Span::styled(format!(" {percent:>3}%  "), Style::default().fg(Color::White)),
                Span::styled(item.id.clone(), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(item.title.clone()),
            ]);
            if is_selected {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            lines.push(line);
        }
    }

    if !groups.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Sprint Progress Overview:",
            Style::default().fg(Color::Gray),
        )));
        for group in groups {
            let average = average_progress(snapshot, group);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12} ", group.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(progress_bar(average), Style::default().fg(Color::Green)),
                Span::raw(format!(" {average:>3}%")),
            ]));
        }
    }

    let visible = usize::from(inner.height);
    let first = scroll_offset(selected_line, visible);

    let hits = targets
        .into_iter()
        .filter(|(line, _, _)| (first..first + visible).contains(line))
        .map(|(line, group, offset)| HitRegion {
            area: Rect::new(
                inner.x,
                inner.y + u16::try_from(line - first).unwrap_or(u16::MAX),
                inner.width,
                1,
            ),
            group,
            offset,
        })
        .collect();

    Paragraph::new(lines)
        .scroll((u16::try_from(first).unwrap_or(u16::MAX), 0))
        .render(inner, buf);

    hits
}
