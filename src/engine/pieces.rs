//! Piece geometry table: tetromino shapes, bounding boxes and kick data.
//!
//! All of this is static data. Rotation legality is decided by scanning a
//! kick table in order and taking the first offset at which the rotated
//! shape fits; there is no per-piece control flow. The CW/CCW tables follow
//! the Standard Rotation System, the 180-degree turn has its own dedicated
//! tables. The y axis points down, so vertical kick components are negated
//! relative to the usual y-up presentation of the SRS data.

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order that also defines their color index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable color index used by the backend contract (`2 + N` on the wire).
    pub fn color_index(self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Side length of the square bounding box the offsets live in.
    pub fn box_size(self) -> i32 {
        match self {
            PieceKind::I | PieceKind::O => 4,
            _ => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// The four rotation states (`North` = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn half(self) -> Self {
        self.cw().cw()
    }

    fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// A rotation request, applied through the kick tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Cw,
    Ccw,
    Half,
}

impl Turn {
    pub fn apply(self, rotation: Rotation) -> Rotation {
        match self {
            Turn::Cw => rotation.cw(),
            Turn::Ccw => rotation.ccw(),
            Turn::Half => rotation.half(),
        }
    }
}

/// Offset of a single cell relative to the piece origin (box top-left).
pub type CellOffset = (i32, i32);

/// Occupied cells of one rotation state.
pub type PieceShape = [CellOffset; 4];

/// Occupied cells for a piece kind in a rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => match rotation {
            Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
            Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
            Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
        },
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => match rotation {
            Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::S => match rotation {
            Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
            Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
            Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::Z => match rotation {
            Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
        },
        PieceKind::J => match rotation {
            Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
            Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
        },
        PieceKind::L => match rotation {
            Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
            Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
    }
}

/// Positional offset tried to make an otherwise blocked rotation legal.
pub type Kick = (i32, i32);

/// Quarter-turn kick table, indexed by `from.index() * 2 + direction`
/// where direction is 0 for CW and 1 for CCW.
type QuarterKicks = [[Kick; 5]; 8];

/// Half-turn kick table, indexed by the from-rotation.
type HalfKicks = [[Kick; 6]; 4];

/// O never needs to move: its four rotation states occupy the same cells.
const O_QUARTER: QuarterKicks = [[(0, 0); 5]; 8];
const O_HALF: HalfKicks = [[(0, 0); 6]; 4];

/// Shared by J, L, S, T and Z.
const JLSTZ_QUARTER: QuarterKicks = [
    // N->E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // N->W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->S
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->N
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // S->E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // W->N
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // W->S
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// The line piece kicks wider than everything else.
const I_QUARTER: QuarterKicks = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
];

/// Half-turn kicks for J, L, S, T and Z: nudge up, then sideways.
const JLSTZ_HALF: HalfKicks = [
    // N->S
    [(0, 0), (0, -1), (1, -1), (-1, -1), (1, 0), (-1, 0)],
    // E->W
    [(0, 0), (1, 0), (1, -2), (1, -1), (0, -2), (0, -1)],
    // S->N
    [(0, 0), (0, 1), (-1, 1), (1, 1), (-1, 0), (1, 0)],
    // W->E
    [(0, 0), (-1, 0), (-1, -2), (-1, -1), (0, -2), (0, -1)],
];

/// Half-turn kicks for the line piece: slide along its long axis.
const I_HALF: HalfKicks = [
    // N->S
    [(0, 0), (-1, 0), (-2, 0), (1, 0), (2, 0), (0, -1)],
    // E->W
    [(0, 0), (0, -1), (0, -2), (0, 1), (0, 2), (-1, 0)],
    // S->N
    [(0, 0), (1, 0), (2, 0), (-1, 0), (-2, 0), (0, 1)],
    // W->E
    [(0, 0), (0, 1), (0, 2), (0, -1), (0, -2), (1, 0)],
];

/// Ordered kick offsets for one (piece, from-state, turn) transition.
pub fn kicks(kind: PieceKind, from: Rotation, turn: Turn) -> &'static [Kick] {
    match turn {
        Turn::Half => {
            let table: &'static HalfKicks = match kind {
                PieceKind::O => &O_HALF,
                PieceKind::I => &I_HALF,
                _ => &JLSTZ_HALF,
            };
            &table[from.index()]
        }
        Turn::Cw | Turn::Ccw => {
            let table: &'static QuarterKicks = match kind {
                PieceKind::O => &O_QUARTER,
                PieceKind::I => &I_QUARTER,
                _ => &JLSTZ_QUARTER,
            };
            let dir = if turn == Turn::Cw { 0 } else { 1 };
            &table[from.index() * 2 + dir]
        }
    }
}

/// Try to rotate a piece at `(x, y)`, kicking as needed.
///
/// `is_free` reports whether a board cell is in bounds and empty. Returns
/// the new rotation and the kick offset that was applied, or `None` when
/// every offset in the table is blocked (the request is then a no-op).
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
    turn: Turn,
    is_free: impl Fn(i32, i32) -> bool,
) -> Option<(Rotation, Kick)> {
    let target = turn.apply(rotation);
    let target_shape = shape(kind, target);

    for &(dx, dy) in kicks(kind, rotation, turn) {
        let fits = target_shape
            .iter()
            .all(|&(mx, my)| is_free(x + dx + mx, y + dy + my));
        if fits {
            return Some((target, (dx, dy)));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rotation_state_has_four_cells_in_box() {
        for kind in PieceKind::ALL {
            let size = kind.box_size();
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let s = shape(kind, rotation);
                for (dx, dy) in s {
                    assert!(dx >= 0 && dx < size, "{kind:?} {rotation:?} x {dx}");
                    assert!(dy >= 0 && dy < size, "{kind:?} {rotation:?} y {dy}");
                }
            }
        }
    }

    #[test]
    fn o_shape_is_rotation_invariant() {
        let north = shape(PieceKind::O, Rotation::North);
        for rotation in [Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(shape(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn first_kick_is_always_identity() {
        for kind in PieceKind::ALL {
            for from in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                for turn in [Turn::Cw, Turn::Ccw, Turn::Half] {
                    assert_eq!(kicks(kind, from, turn)[0], (0, 0));
                }
            }
        }
    }

    #[test]
    fn unobstructed_rotation_uses_no_kick() {
        let (rotation, kick) =
            try_rotate(PieceKind::T, Rotation::North, 3, 5, Turn::Cw, |_, _| true).unwrap();
        assert_eq!(rotation, Rotation::East);
        assert_eq!(kick, (0, 0));
    }

    #[test]
    fn blocked_rotation_is_refused() {
        let result = try_rotate(PieceKind::T, Rotation::North, 3, 5, Turn::Cw, |_, _| false);
        assert!(result.is_none());
    }

    #[test]
    fn half_turn_reaches_opposite_state() {
        let (rotation, _) =
            try_rotate(PieceKind::J, Rotation::East, 3, 5, Turn::Half, |_, _| true).unwrap();
        assert_eq!(rotation, Rotation::West);
    }

    #[test]
    fn o_rotation_always_succeeds_in_place() {
        // O's states are identical, so rotating against a wall still works.
        let occupied_everywhere_but_home = |x: i32, y: i32| {
            shape(PieceKind::O, Rotation::North)
                .iter()
                .any(|&(mx, my)| (mx, my) == (x, y))
        };
        let (rotation, kick) = try_rotate(
            PieceKind::O,
            Rotation::North,
            0,
            0,
            Turn::Cw,
            occupied_everywhere_but_home,
        )
        .unwrap();
        assert_eq!(rotation, Rotation::East);
        assert_eq!(kick, (0, 0));
    }
}
