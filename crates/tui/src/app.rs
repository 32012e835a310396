//! Main application struct and run loop.
//!
//! [`App`] ties the pieces together: it turns messages into state changes,
//! renders the active view and remembers where items were drawn so that
//! mouse clicks can be mapped back to a selection.

use projhub_core::{Message, Session, ViewKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT},
    terminal::AppTerminal,
    widgets::{
        HitRegion, render_board, render_detail_overlay, render_header, render_help_overlay,
        render_roadmap, render_status_bar, render_table,
    },
};

/// Item regions from the last render, tagged with the view they belong to.
#[derive(Debug, Clone, Default)]
struct RenderedHits {
    view: Option<ViewKind>,
    regions: Vec<HitRegion>,
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    hits: RenderedHits,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates a new application around `session`.
    ///
    /// # Examples
    ///
    /// ```
    /// use projhub_core::{Session, dummy};
    /// use projhub_tui::App;
    ///
    /// let app = App::new(Session::new(dummy::sample_snapshot().unwrap()));
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            state: AppState::new(session),
            should_quit: false,
            hits: RenderedHits::default(),
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether a quit has been requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether the header was shown in the last render.
    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Updates the application state based on a message.
    ///
    /// `Quit` always quits. While the help or detail overlay is visible any
    /// other message only closes it.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }
        if self.state.dismiss_help() || self.state.dismiss_detail() {
            return;
        }

        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ToggleDetail => {
                self.state.toggle_detail();
            }
            Message::JumpToFirst => {
                self.state.jump_to_first();
            }
            Message::JumpToLast => {
                self.state.jump_to_last();
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
            msg if msg.is_navigation() => {
                self.state.navigate(&msg);
            }
            _ => {}
        }
    }

    /// Selects the item drawn under the given cell, if any.
    ///
    /// Regions recorded for another view are never used.
    fn handle_click(&mut self, column: u16, row: u16) {
        let active = self.state.session.active_view();
        if self.hits.view != Some(active) {
            tracing::debug!(
                ?active,
                rendered = ?self.hits.view,
                "click ignored, layout is stale"
            );
            return;
        }

        let Some(hit) = self
            .hits
            .regions
            .iter()
            .find(|hit| hit.contains(column, row))
            .copied()
        else {
            return;
        };
        self.state.navigate(&Message::SelectAt {
            group: hit.group,
            offset: hit.offset,
        });
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum size only a "terminal too small" notice is drawn.
    /// Below `MIN_HEIGHT_WITH_HEADER` the header is hidden to reclaim space.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.hits = RenderedHits::default();
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let session = &self.state.session;
        let buf = frame.buffer_mut();
        if show_header {
            render_header(
                session.snapshot().name(),
                session.active_view(),
                header_area,
                buf,
            );
        }
        let regions = render_content(session, content_area, buf);
        render_status_bar(&session.frame(), status_area, buf);

        if self.state.detail_visible {
            if let Some(item) = session.frame().selected_item() {
                render_detail_overlay(session.snapshot(), item, area, buf);
            }
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }

        self.hits = RenderedHits {
            view: Some(self.state.session.active_view()),
            regions,
        };
    }

    /// Runs the main application loop until a quit is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or polling the terminal fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use projhub_core::{Session, dummy};
    /// use projhub_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Session::new(dummy::sample_snapshot()?));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event) {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Renders the active view and returns the regions of the items drawn.
fn render_content(session: &Session, area: Rect, buf: &mut Buffer) -> Vec<HitRegion> {
    let frame = session.frame();
    match frame.view {
        ViewKind::Board => render_board(frame.projection.groups(), frame.cursor, area, buf),
        ViewKind::Table => render_table(frame.projection.rows(), frame.cursor, area, buf),
        ViewKind::Roadmap => render_roadmap(
            session.snapshot(),
            frame.projection.groups(),
            frame.cursor,
            area,
            buf,
        ),
    }
}

fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}
