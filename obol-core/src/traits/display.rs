//! Display driver trait for the front-panel character LCD

/// Character rows on the LCD
pub const DISPLAY_ROWS: u8 = 2;
/// Character columns on the LCD
pub const DISPLAY_COLS: u8 = 16;

/// Cut text to the panel width without splitting a character
///
/// The panel is `DISPLAY_COLS` characters wide; anything past that is
/// invisible anyway, so renderers drop it before buffering.
pub fn fit_to_width(text: &str) -> &str {
    match text.char_indices().nth(DISPLAY_COLS as usize) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Row or column outside the panel geometry
    OutOfBounds,
    /// Controller did not come ready in time
    Timeout,
}

/// Trait for the character LCD
///
/// The display is a dumb text panel; layout decisions stay with the
/// renderer. Implementations only move characters and the cursor.
pub trait DisplayDriver {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at a position
    ///
    /// - `row`: row number (0..DISPLAY_ROWS)
    /// - `col`: column number (0..DISPLAY_COLS)
    ///
    /// Text running past the last column is truncated.
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Move the cursor to a position
    fn cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Show or hide the blinking cursor (used as the alarm flash indicator)
    fn cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError>;
}
