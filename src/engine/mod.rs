//! Rules engine - pure game logic with no external I/O.
//!
//! Everything under here is deterministic given a config and a seed. It
//! never draws, never reads input and never looks at a clock; the driver
//! feeds it ticks and actions and renders from its accessors.

pub mod board;
pub mod config;
pub mod game;
pub mod pieces;
pub mod queue;
pub mod randomizer;
pub mod scoring;

// Re-export the types callers touch in practice.
pub use board::Board;
pub use config::{GameConfig, FULL_HEIGHT_AUTO};
pub use game::{Action, ActivePiece, CellView, GameState};
pub use pieces::{PieceKind, Rotation, Turn};
pub use randomizer::{Randomizer, RandomizerKind};
pub use scoring::LockEvent;
