//! Crossterm implementation of the [`Backend`] trait.
//!
//! All drawing goes through `QueueableCommand` and reaches the terminal on
//! `present`. The raw-mode/alternate-screen lifecycle mirrors `init`/`exit`
//! and `exit` is written to be safe whatever state `init` got to.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor, event,
    event::{Event, KeyCode, KeyEventKind},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::backend::{Backend, Key, Window, COLOR_PIECE_BASE, COLOR_SHADOW};

/// Piece colors by `PieceKind::color_index()` order (I O T S Z J L).
const PIECE_COLORS: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::DarkYellow,
];

pub struct TerminalBackend {
    stdout: io::Stdout,
    raw: bool,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw: false,
        }
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TerminalBackend {
    fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(decode_key(key.code)),
            _ => Ok(None),
        }
    }

    fn draw_box(&mut self, win: &Window) -> Result<()> {
        if win.width < 2 || win.height < 2 {
            return Ok(());
        }
        let right = win.x + win.width - 1;
        let bottom = win.y + win.height - 1;
        let inner = (win.width - 2) as usize;

        self.stdout.queue(cursor::MoveTo(win.x, win.y))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner))))?;
        for row in win.y + 1..bottom {
            self.stdout.queue(cursor::MoveTo(win.x, row))?;
            self.stdout.queue(Print('│'))?;
            self.stdout.queue(Print(" ".repeat(inner)))?;
            self.stdout.queue(cursor::MoveTo(right, row))?;
            self.stdout.queue(Print('│'))?;
        }
        self.stdout.queue(cursor::MoveTo(win.x, bottom))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner))))?;
        Ok(())
    }

    fn erase_window(&mut self, win: &Window) -> Result<()> {
        let blank = " ".repeat(win.width as usize);
        for row in win.y..win.y + win.height {
            self.stdout.queue(cursor::MoveTo(win.x, row))?;
            self.stdout.queue(Print(&blank))?;
        }
        Ok(())
    }

    fn draw_cell(&mut self, win: &Window, x: u16, y: u16, color: u8) -> Result<()> {
        // Two characters per board cell keeps the aspect ratio square-ish.
        let col = win.x + 1 + x * 2;
        let row = win.y + 1 + y;
        self.stdout.queue(cursor::MoveTo(col, row))?;
        if color >= COLOR_PIECE_BASE {
            let index = (color - COLOR_PIECE_BASE) as usize % PIECE_COLORS.len();
            self.stdout.queue(SetBackgroundColor(PIECE_COLORS[index]))?;
            self.stdout.queue(Print("  "))?;
            self.stdout.queue(ResetColor)?;
        } else if color == COLOR_SHADOW {
            self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
            self.stdout.queue(Print("░░"))?;
            self.stdout.queue(ResetColor)?;
        } else {
            self.stdout.queue(Print("  "))?;
        }
        Ok(())
    }

    fn print(&mut self, col: u16, row: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(col, row))?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn erase_line(&mut self, col: u16, row: u16) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(col, row))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

fn decode_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}
