//! Game configuration: immutable after init.
//!
//! All timing values are in ticks of the fixed 1/60-second simulation step.
//! Validation of operator-supplied values (minimums, fatal reporting) lives
//! entirely in the CLI layer; the engine trusts the config it is given.

use crate::engine::randomizer::RandomizerKind;

/// Sentinel for `full_height` meaning "derive from `height`".
pub const FULL_HEIGHT_AUTO: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Columns of the play field.
    pub width: i32,
    /// Visible rows.
    pub height: i32,
    /// Total rows including the hidden buffer above the visible area.
    pub full_height: i32,
    /// Rows descended per tick (fractional; accumulated).
    pub gravity: f64,
    /// Ticks a landed piece may rest before it locks.
    pub lock_delay: u32,
    /// How many successful moves/rotations may restart the lock timer.
    pub max_move_reset: u32,
    /// Lookahead depth of the next-piece queue.
    pub next_piece_queue_size: usize,
    /// Ticks the field pauses with completed rows still shown.
    pub line_clear_delay: u32,
    /// Whether the landing-position shadow is shown.
    pub shadow: bool,
    pub randomizer: RandomizerKind,
}

impl GameConfig {
    /// Modern ruleset: bag randomizer, lookahead, shadow, lock-delay grace.
    pub const fn modern() -> Self {
        Self {
            width: 10,
            height: 20,
            full_height: FULL_HEIGHT_AUTO,
            gravity: 1.0 / 60.0,
            lock_delay: 30,
            max_move_reset: 15,
            next_piece_queue_size: 5,
            line_clear_delay: 20,
            shadow: true,
            randomizer: RandomizerKind::Bag,
        }
    }

    /// Old-school ruleset: independent draws, one preview, no grace frills.
    pub const fn classic() -> Self {
        Self {
            width: 10,
            height: 20,
            full_height: FULL_HEIGHT_AUTO,
            gravity: 1.0 / 60.0,
            lock_delay: 30,
            max_move_reset: 0,
            next_piece_queue_size: 1,
            line_clear_delay: 0,
            shadow: false,
            randomizer: RandomizerKind::Classic,
        }
    }

    /// Modern rules with every delay stripped, for sprint-style play.
    pub const fn delayless() -> Self {
        Self {
            lock_delay: 1,
            max_move_reset: 0,
            line_clear_delay: 0,
            ..Self::modern()
        }
    }

    /// Resolve the `full_height` sentinel: the hidden buffer is as tall as
    /// the visible field, clamped to 4..=20 rows.
    pub fn resolve_full_height(&mut self) {
        if self.full_height == FULL_HEIGHT_AUTO {
            self.full_height = self.height + self.height.clamp(4, 20);
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut config = Self::modern();
        config.resolve_full_height();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_sentinel_resolves_to_double_height() {
        let mut config = GameConfig::modern();
        config.resolve_full_height();
        assert_eq!(config.full_height, 40);
    }

    #[test]
    fn short_field_gets_minimum_buffer() {
        let mut config = GameConfig {
            height: 3,
            ..GameConfig::modern()
        };
        config.resolve_full_height();
        assert_eq!(config.full_height, 7);
    }

    #[test]
    fn tall_field_buffer_is_capped() {
        let mut config = GameConfig {
            height: 30,
            ..GameConfig::modern()
        };
        config.resolve_full_height();
        assert_eq!(config.full_height, 50);
    }

    #[test]
    fn explicit_full_height_is_kept() {
        let mut config = GameConfig {
            full_height: 24,
            ..GameConfig::modern()
        };
        config.resolve_full_height();
        assert_eq!(config.full_height, 24);
    }
}
