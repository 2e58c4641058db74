//! Command-line option surface.
//!
//! Options below a sane minimum are fatal at startup, before any game
//! state or terminal takeover exists; clap's range parsers report them and
//! exit. Everything past parsing is a trusted config. Preset flags
//! (`--classic`, `--delayless`) pick the base config, then any individual
//! option overrides it.

use clap::{value_parser, Parser};

use crate::engine::GameConfig;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Terminal falling-block game")]
pub struct Options {
    /// Board width in cells.
    #[arg(short, long, value_parser = value_parser!(i32).range(4..))]
    width: Option<i32>,

    /// Visible board height in cells.
    #[arg(short = 'H', long, value_parser = value_parser!(i32).range(1..))]
    height: Option<i32>,

    /// Total board height including the hidden rows above the visible
    /// area. Defaults to height plus a buffer of the same size (4..=20).
    #[arg(short, long, value_parser = value_parser!(i32).range(3..))]
    full_height: Option<i32>,

    /// Gravity in rows per second.
    #[arg(short, long, value_parser = value_parser!(u32).range(0..))]
    gravity: Option<u32>,

    /// Ticks a landed piece rests before locking (60 ticks per second).
    #[arg(short, long, value_parser = value_parser!(u32).range(1..))]
    lock_delay: Option<u32>,

    /// How many moves may restart the lock timer per piece.
    #[arg(short, long)]
    max_move_resets: Option<u32>,

    /// Number of upcoming pieces shown.
    #[arg(short = 'q', long)]
    queue_size: Option<usize>,

    /// Ticks the field pauses after a line clear.
    #[arg(short = 'd', long)]
    line_clear_delay: Option<u32>,

    /// Show the landing shadow (0 or 1).
    #[arg(short, long, value_parser = value_parser!(u8).range(0..=1))]
    shadow: Option<u8>,

    /// Classic ruleset: uniform randomizer, one preview, no frills.
    #[arg(short, long, conflicts_with = "delayless")]
    classic: bool,

    /// Modern ruleset with all delays removed.
    #[arg(short = 'D', long)]
    delayless: bool,

    /// One-key finesse: each key places the piece at a fixed rotation
    /// and column.
    #[arg(short = '1', long)]
    one_key_finesse: bool,

    /// Randomizer seed. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

impl Options {
    /// Assemble the game config: preset base, overrides, resolved height
    /// sentinel.
    pub fn game_config(&self) -> GameConfig {
        let mut config = if self.classic {
            GameConfig::classic()
        } else if self.delayless {
            GameConfig::delayless()
        } else {
            GameConfig::modern()
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(full_height) = self.full_height {
            config.full_height = full_height;
        }
        if let Some(gravity) = self.gravity {
            config.gravity = f64::from(gravity) / 60.0;
        }
        if let Some(lock_delay) = self.lock_delay {
            config.lock_delay = lock_delay;
        }
        if let Some(resets) = self.max_move_resets {
            config.max_move_reset = resets;
        }
        if let Some(queue_size) = self.queue_size {
            config.next_piece_queue_size = queue_size;
        }
        if let Some(delay) = self.line_clear_delay {
            config.line_clear_delay = delay;
        }
        if let Some(shadow) = self.shadow {
            config.shadow = shadow != 0;
        }

        config.resolve_full_height();
        config
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn one_key_finesse(&self) -> bool {
        self.one_key_finesse
    }
}
