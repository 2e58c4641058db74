//! Next-piece lookahead queue and the hold slot.

use std::collections::VecDeque;

use crate::engine::pieces::PieceKind;
use crate::engine::randomizer::Randomizer;

/// Fixed-depth lookahead buffer fed lazily by the randomizer.
#[derive(Debug, Clone)]
pub struct NextQueue {
    buf: VecDeque<PieceKind>,
    randomizer: Randomizer,
}

impl NextQueue {
    pub fn new(mut randomizer: Randomizer, depth: usize) -> Self {
        let mut buf = VecDeque::with_capacity(depth);
        for _ in 0..depth {
            buf.push_back(randomizer.next());
        }
        Self { buf, randomizer }
    }

    pub fn depth(&self) -> usize {
        self.buf.len()
    }

    /// Upcoming piece at `index` (0 = next to spawn).
    pub fn peek(&self, index: usize) -> Option<PieceKind> {
        self.buf.get(index).copied()
    }

    /// Pop the front entry and refill to depth. With depth zero the queue
    /// degenerates to drawing straight from the randomizer.
    pub fn pop(&mut self) -> PieceKind {
        match self.buf.pop_front() {
            Some(kind) => {
                self.buf.push_back(self.randomizer.next());
                kind
            }
            None => self.randomizer.next(),
        }
    }
}

/// At most one stashed piece kind, usable once per active-piece lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldSlot {
    occupant: Option<PieceKind>,
    used_this_lifetime: bool,
}

impl HoldSlot {
    pub fn occupant(&self) -> Option<PieceKind> {
        self.occupant
    }

    pub fn is_used(&self) -> bool {
        self.used_this_lifetime
    }

    /// Called once per new active piece spawn.
    pub fn reset_lifetime(&mut self) {
        self.used_this_lifetime = false;
    }

    /// Stash `kind`, returning the previous occupant (to be respawned).
    /// Marks the slot used for the rest of this piece lifetime.
    pub fn stash(&mut self, kind: PieceKind) -> Option<PieceKind> {
        let previous = self.occupant.replace(kind);
        self.used_this_lifetime = true;
        previous
    }
}
