//! Shared layout measurements for the TUI.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each board card: border plus two content lines.
pub const CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for the view and status bar.
///
/// Room for the status bar, a bordered view and one board card.
pub const MIN_HEIGHT: u16 = STATUS_BAR_HEIGHT + 2 + CARD_HEIGHT;

/// Minimum terminal height at which the header is shown as well.
///
/// Between `MIN_HEIGHT` and this value the header is hidden to reclaim
/// its rows.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has four columns; each needs about fifteen cells for an id
/// and a truncated title.
pub const MIN_WIDTH: u16 = 60;
