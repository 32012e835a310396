//! Helpers shared by the TUI test modules.

use ratatui::buffer::Buffer;

/// Converts a [`Buffer`] to text, one line per row, trailing blanks trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let start = result.len();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = start + result[start..].trim_end_matches(' ').len();
        result.truncate(trimmed);
        result.push('\n');
    }
    result
}
