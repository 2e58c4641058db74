//! Terminal falling-block game.
//!
//! The rules live in [`engine`], which is deterministic and free of any
//! I/O. [`backend`] is the drawing/input seam, [`driver`] runs the
//! fixed-rate loop between them, and [`cli`] turns options into a config.

pub mod backend;
pub mod cli;
pub mod driver;
pub mod engine;
