//! Fixed-rate game driver.
//!
//! Owns the run loop: waits on the backend for key presses with a timeout
//! sized to the next simulation step, feeds actions and ticks to the
//! engine, and redraws after every pass. Simulation advances at 60 ticks
//! per second regardless of render or input pace; a slow frame is caught
//! up by running every overdue tick before drawing.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::{Backend, Key, Window, COLOR_EMPTY, COLOR_PIECE_BASE, COLOR_SHADOW};
use crate::engine::{
    pieces, Action, CellView, GameConfig, GameState, LockEvent, PieceKind, Rotation,
};

const TICK: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// How long the final screen lingers before the terminal is restored.
const DEATH_LINGER: Duration = Duration::from_secs(5);

/// One-key finesse keyboard rows. The row picks the number of clockwise
/// rotations, the position in the row picks the target column.
const FINESSE_ROWS: [&str; 4] = ["asdfghjkl;", "zxcvbnm,./", "1234567890", "qwertyuiop"];

pub fn run(
    backend: &mut dyn Backend,
    config: GameConfig,
    seed: u64,
    one_key_finesse: bool,
) -> Result<()> {
    let mut game = GameState::new(config, seed);
    let layout = Layout::new(&config);

    for win in [&layout.hold, &layout.board, &layout.next] {
        backend.draw_box(win)?;
    }

    let mut pieces_placed: u32 = 0;
    let mut ticks: u32 = 0;

    draw(backend, &game, &layout, pieces_placed, ticks)?;

    let mut accumulated = Duration::ZERO;
    let mut prev = Instant::now();

    while game.is_alive() {
        let timeout = TICK.saturating_sub(accumulated);
        if let Some(key) = backend.poll_key(timeout)? {
            if is_quit(key, one_key_finesse) {
                return Ok(());
            }
            for action in actions_for_key(key, one_key_finesse, config.width) {
                if let Some(event) = game.key_down(action) {
                    pieces_placed += 1;
                    show_lock_event(backend, &layout, &event)?;
                }
            }
        }

        let now = Instant::now();
        accumulated += now - prev;
        prev = now;
        while accumulated >= TICK {
            accumulated -= TICK;
            if let Some(event) = game.tick() {
                pieces_placed += 1;
                show_lock_event(backend, &layout, &event)?;
            }
            ticks += 1;
        }

        draw(backend, &game, &layout, pieces_placed, ticks)?;
    }

    show_action_text(backend, &layout, "You died")?;
    std::thread::sleep(DEATH_LINGER);
    Ok(())
}

/// Screen layout: hold box on the left, field in the middle, previews on
/// the right, counters under the hold box, action text above the field.
struct Layout {
    hold: Window,
    board: Window,
    next: Window,
    status_col: u16,
    status_row: u16,
}

impl Layout {
    fn new(config: &GameConfig) -> Self {
        let hold = Window::new(2, 4, 10, 6);
        let board = Window::new(
            hold.x + hold.width + 2,
            hold.y,
            config.width as u16 * 2 + 2,
            config.full_height as u16 + 2,
        );
        let next = Window::new(
            board.x + board.width,
            board.y,
            10,
            config.next_piece_queue_size as u16 * 4 + 2,
        );
        Self {
            hold,
            board,
            next,
            status_col: hold.x,
            status_row: hold.y + hold.height + 1,
        }
    }
}

fn is_quit(key: Key, one_key_finesse: bool) -> bool {
    // 'q' is a finesse key, so only Esc quits in finesse mode.
    match key {
        Key::Esc => true,
        Key::Char('q') => !one_key_finesse,
        _ => false,
    }
}

fn actions_for_key(key: Key, one_key_finesse: bool, board_width: i32) -> Vec<Action> {
    if one_key_finesse {
        return finesse_actions(key, board_width);
    }
    let mut actions = Vec::new();
    let action = match key {
        Key::Left => Some(Action::Left),
        Key::Right => Some(Action::Right),
        Key::Down => Some(Action::SoftDrop),
        Key::Char(' ') => Some(Action::HardDrop),
        Key::Char('z') => Some(Action::RotateCcw),
        Key::Char('x') | Key::Up => Some(Action::RotateCw),
        Key::Char('c') => Some(Action::Hold),
        Key::Char('a') => Some(Action::Rotate180),
        _ => None,
    };
    if let Some(action) = action {
        actions.push(action);
    }
    actions
}

/// Map a finesse key to (clockwise rotations, target column).
fn finesse_target(c: char) -> Option<(usize, usize)> {
    FINESSE_ROWS.iter().enumerate().find_map(|(rotations, row)| {
        row.char_indices()
            .find(|&(_, key)| key == c)
            .map(|(column, _)| (rotations, column))
    })
}

/// Expand one finesse key press into the action burst that places the
/// piece: rotate, slam into the nearer wall, walk to the column, drop.
/// Space stays the hold key; anything else is ignored. The burst grows
/// with the board width (wall slam plus walk-back), so the buffer is
/// sized per call rather than bounded up front.
fn finesse_actions(key: Key, board_width: i32) -> Vec<Action> {
    let mut actions = Vec::new();
    let Key::Char(c) = key else {
        return actions;
    };
    let Some((rotations, column)) = finesse_target(c) else {
        if c == ' ' {
            actions.push(Action::Hold);
        }
        return actions;
    };

    let width = board_width as usize;
    actions.reserve(rotations + width + width / 2 + 1);
    for _ in 0..rotations {
        actions.push(Action::RotateCw);
    }
    if column < width / 2 {
        for _ in 0..width {
            actions.push(Action::Left);
        }
        for _ in 0..column {
            actions.push(Action::Right);
        }
    } else {
        for _ in 0..width {
            actions.push(Action::Right);
        }
        for _ in 0..(width - 1).saturating_sub(column) {
            actions.push(Action::Left);
        }
    }
    actions.push(Action::HardDrop);
    actions
}

fn show_lock_event(backend: &mut dyn Backend, layout: &Layout, event: &LockEvent) -> Result<()> {
    if !event.is_noteworthy() {
        return Ok(());
    }
    show_action_text(backend, layout, &action_text(event))
}

fn action_text(event: &LockEvent) -> String {
    let mut text = String::new();
    if event.all_clear {
        text.push_str("All Clear ");
    }
    if event.back_to_back {
        text.push_str("B2B ");
    }
    if event.spin {
        text.push_str("T Spin ");
    } else if event.mini_spin {
        text.push_str("Mini T Spin ");
    }
    text.push_str(event.clear_name());
    if event.combo > 0 {
        text.push_str(&format!(" Combo {}", event.combo));
    }
    text.trim_end().to_string()
}

fn show_action_text(backend: &mut dyn Backend, layout: &Layout, text: &str) -> Result<()> {
    let row = layout.board.y.saturating_sub(2);
    backend.erase_line(0, row)?;
    let width = layout.board.width as usize;
    let col = layout.board.x + (width.saturating_sub(text.len()) / 2) as u16;
    backend.print(col, row, text)?;
    backend.present()?;
    Ok(())
}

fn draw(
    backend: &mut dyn Backend,
    game: &GameState,
    layout: &Layout,
    pieces_placed: u32,
    ticks: u32,
) -> Result<()> {
    let config = game.config();

    for y in 0..config.full_height {
        for x in 0..config.width {
            let color = match game.cell_view(x, y) {
                CellView::Empty => COLOR_EMPTY,
                CellView::Shadow => COLOR_SHADOW,
                CellView::Filled(kind) => COLOR_PIECE_BASE + kind.color_index(),
            };
            backend.draw_cell(&layout.board, x as u16, y as u16, color)?;
        }
    }

    draw_preview(backend, &layout.hold, game.hold_piece(), 0)?;
    for i in 0..config.next_piece_queue_size {
        draw_preview(backend, &layout.next, game.peek_next(i), i as u16)?;
    }

    let col = layout.status_col;
    let row = layout.status_row;
    backend.print(col, row, &format!("Score: {}", game.score()))?;
    backend.print(col, row + 1, &format!("Level: {}", game.level()))?;
    backend.print(col, row + 2, &format!("Lines: {}", game.lines_cleared()))?;
    let pps = if ticks > 0 {
        pieces_placed as f64 / (ticks as f64 / 60.0)
    } else {
        0.0
    };
    backend.print(col, row + 3, &format!("  PPS: {pps:.2}"))?;

    backend.present()?;
    Ok(())
}

/// Draw one piece preview in its 4x4 slot, erasing whatever was there.
/// `slot` stacks previews vertically for the next-piece window.
fn draw_preview(
    backend: &mut dyn Backend,
    win: &Window,
    kind: Option<PieceKind>,
    slot: u16,
) -> Result<()> {
    for y in 0..4u16 {
        for x in 0..4u16 {
            backend.draw_cell(win, x, slot * 4 + y, COLOR_EMPTY)?;
        }
    }
    let Some(kind) = kind else {
        return Ok(());
    };
    // 3-box pieces sit one row lower so they read as centered.
    let y_offset = if kind.box_size() >= 4 { 0 } else { 1 };
    for (dx, dy) in pieces::shape(kind, Rotation::North) {
        backend.draw_cell(
            win,
            dx as u16,
            slot * 4 + (dy + y_offset) as u16,
            COLOR_PIECE_BASE + kind.color_index(),
        )?;
    }
    Ok(())
}
