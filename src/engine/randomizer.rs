//! Piece randomizer: an unbounded lazy sequence of piece kinds.
//!
//! Two interchangeable strategies, carried as a tagged enum so callers only
//! ever see `next()`. `Bag` deals a shuffled permutation of all seven kinds
//! before reshuffling; `Classic` draws uniformly and independently.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::engine::pieces::PieceKind;

/// Which strategy a game config asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomizerKind {
    Bag,
    Classic,
}

#[derive(Debug, Clone)]
pub enum Randomizer {
    Bag {
        rng: StdRng,
        bag: [PieceKind; 7],
        drawn: usize,
    },
    Classic {
        rng: StdRng,
    },
    /// Degenerate source that repeats one kind forever. Test and bench
    /// support; not reachable from any config.
    Repeat(PieceKind),
}

impl Randomizer {
    pub fn new(kind: RandomizerKind, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        match kind {
            // drawn == len forces a shuffle on the first draw.
            RandomizerKind::Bag => Randomizer::Bag {
                rng,
                bag: PieceKind::ALL,
                drawn: 7,
            },
            RandomizerKind::Classic => Randomizer::Classic { rng },
        }
    }

    pub fn repeat(kind: PieceKind) -> Self {
        Randomizer::Repeat(kind)
    }

    /// Draw the next piece kind.
    pub fn next(&mut self) -> PieceKind {
        match self {
            Randomizer::Bag { rng, bag, drawn } => {
                if *drawn >= bag.len() {
                    bag.shuffle(rng);
                    *drawn = 0;
                }
                let kind = bag[*drawn];
                *drawn += 1;
                kind
            }
            Randomizer::Classic { rng } => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Randomizer::Repeat(kind) => *kind,
        }
    }
}
