//! Rendering/input backend seam.
//!
//! The driver draws through the [`Backend`] trait and never touches the
//! terminal directly, so the whole presentation layer can be swapped
//! without the engine or the driver noticing. Coordinates are terminal
//! character cells; board cells are two characters wide, which `draw_cell`
//! hides from callers.

pub mod term;

pub use term::TerminalBackend;

use std::time::Duration;

use anyhow::Result;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Esc,
}

/// A bordered rectangle on screen. `x`/`y` are the top-left corner of the
/// border; the interior starts one character in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x: u16,
    pub y: u16,
    /// Total width in characters, border included.
    pub width: u16,
    /// Total height in characters, border included.
    pub height: u16,
}

impl Window {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Cell color indices as the driver passes them: 0 erases, 1 is the
/// landing shadow, `2 + PieceKind::color_index()` selects a piece color.
pub const COLOR_EMPTY: u8 = 0;
pub const COLOR_SHADOW: u8 = 1;
pub const COLOR_PIECE_BASE: u8 = 2;

/// What a presentation layer must provide.
///
/// Drawing calls may be buffered; nothing is guaranteed on screen until
/// `present`. Implementations restore the host terminal in `exit` even
/// after a mid-game error.
pub trait Backend {
    /// Take over the screen (raw mode, alternate screen, hidden cursor).
    fn init(&mut self) -> Result<()>;

    /// Restore the screen. Safe to call after a failed `init`.
    fn exit(&mut self) -> Result<()>;

    /// Wait up to `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    /// Draw `win`'s border and erase its interior.
    fn draw_box(&mut self, win: &Window) -> Result<()>;

    /// Erase `win` entirely, border included.
    fn erase_window(&mut self, win: &Window) -> Result<()>;

    /// Paint the board cell at `(x, y)` inside `win`, in board-cell
    /// coordinates relative to the interior.
    fn draw_cell(&mut self, win: &Window, x: u16, y: u16, color: u8) -> Result<()>;

    /// Print text at an absolute character position.
    fn print(&mut self, col: u16, row: u16, text: &str) -> Result<()>;

    /// Erase from a character position to the end of that line.
    fn erase_line(&mut self, col: u16, row: u16) -> Result<()>;

    /// Flush buffered drawing to the screen.
    fn present(&mut self) -> Result<()>;
}
