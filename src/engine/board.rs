//! Board: the mutable play-field grid.
//!
//! Sized at runtime from the game config (`width` columns by `full_height`
//! rows, where `full_height` includes the hidden buffer above the visible
//! area). Storage is a flat row-major `Vec` in the spirit of a framebuffer:
//! `(x, y)` with x growing right and y growing down, row 0 at the top.
//!
//! The board only ever holds `Empty` or `Filled` cells. The shadow/ghost
//! overlay is a render hint computed on demand by the game state and is
//! never written here.

use arrayvec::ArrayVec;

use crate::engine::pieces::{CellOffset, PieceKind};

/// At most four rows can complete from a single lock.
pub type ClearedRows = ArrayVec<usize, 4>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    full_height: i32,
    cells: Vec<Option<PieceKind>>,
}

impl Board {
    pub fn new(width: i32, full_height: i32) -> Self {
        Self {
            width,
            full_height,
            cells: vec![None; (width * full_height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn full_height(&self) -> i32 {
        self.full_height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.full_height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Cell contents, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Option<PieceKind>> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-bounds writes are refused.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<PieceKind>) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and currently empty.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every cell of the shape maps to an in-bounds empty cell.
    pub fn can_place(&self, shape: &[CellOffset], x: i32, y: i32) -> bool {
        shape.iter().all(|&(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Write a piece's cells into the grid. Used only at lock time, after
    /// `can_place` has held for this position.
    pub fn commit(&mut self, shape: &[CellOffset], x: i32, y: i32, kind: PieceKind) {
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    pub fn is_row_full(&self, y: i32) -> bool {
        match self.index(0, y) {
            Some(start) => self.cells[start..start + self.width as usize]
                .iter()
                .all(|c| c.is_some()),
            None => false,
        }
    }

    /// Row indices that are completely filled, top to bottom.
    pub fn full_rows(&self) -> ClearedRows {
        let mut rows = ClearedRows::new();
        for y in 0..self.full_height {
            if self.is_row_full(y) && !rows.is_full() {
                rows.push(y as usize);
            }
        }
        rows
    }

    /// Remove the given rows (sorted ascending) and shift everything above
    /// each removed row down. Single bottom-up compaction pass.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }
        let width = self.width as usize;
        let mut write_y = self.full_height as usize;

        for read_y in (0..self.full_height as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// No filled cells anywhere (the all-clear condition).
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// True when every filled cell lies in one of the given rows. Used to
    /// decide all-clear at lock time, before the pending rows are removed.
    pub fn filled_only_in(&self, rows: &[usize]) -> bool {
        for y in 0..self.full_height as usize {
            if rows.contains(&y) {
                continue;
            }
            let start = y * self.width as usize;
            if self.cells[start..start + self.width as usize]
                .iter()
                .any(|c| c.is_some())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_board(width: i32, full_height: i32, rows: &[i32]) -> Board {
        let mut board = Board::new(width, full_height);
        for &y in rows {
            for x in 0..width {
                board.set(x, y, Some(PieceKind::I));
            }
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10, 24);
        assert!(board.is_empty());
        for y in 0..24 {
            for x in 0..10 {
                assert!(board.is_free(x, y));
            }
        }
    }

    #[test]
    fn out_of_bounds_is_not_free() {
        let board = Board::new(10, 24);
        assert!(!board.is_free(-1, 0));
        assert!(!board.is_free(0, -1));
        assert!(!board.is_free(10, 0));
        assert!(!board.is_free(0, 24));
        assert_eq!(board.get(10, 0), None);
    }

    #[test]
    fn set_refuses_out_of_bounds() {
        let mut board = Board::new(6, 8);
        assert!(!board.set(6, 0, Some(PieceKind::T)));
        assert!(!board.set(0, 8, Some(PieceKind::T)));
        assert!(board.is_empty());
    }

    #[test]
    fn can_place_and_commit() {
        let mut board = Board::new(10, 24);
        let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
        assert!(board.can_place(&shape, 4, 22));
        board.commit(&shape, 4, 22, PieceKind::O);
        assert!(!board.can_place(&shape, 4, 22));
        assert!(board.is_occupied(5, 23));
    }

    #[test]
    fn full_row_scan_finds_completed_rows() {
        let board = filled_board(10, 24, &[20, 23]);
        assert_eq!(board.full_rows().as_slice(), &[20, 23]);
    }

    #[test]
    fn remove_rows_shifts_everything_above_down() {
        let mut board = filled_board(4, 8, &[6]);
        board.set(0, 5, Some(PieceKind::T));
        board.set(3, 7, Some(PieceKind::L));

        board.remove_rows(&[6]);

        // The marker above the cleared row drops one row.
        assert!(board.is_occupied(0, 6));
        assert!(!board.is_occupied(0, 5));
        // The cell below it stays put.
        assert!(board.is_occupied(3, 7));
        assert!(board.full_rows().is_empty());
    }

    #[test]
    fn remove_multiple_rows_shifts_by_count_below() {
        let mut board = filled_board(4, 8, &[5, 7]);
        board.set(1, 4, Some(PieceKind::S));
        board.set(2, 6, Some(PieceKind::Z));

        board.remove_rows(&[5, 7]);

        // Cell above both removed rows falls two rows.
        assert!(board.is_occupied(1, 6));
        // Cell between them falls one.
        assert!(board.is_occupied(2, 7));
        assert_eq!(
            board.cells.iter().filter(|c| c.is_some()).count(),
            2,
            "only the two markers survive"
        );
    }

    #[test]
    fn filled_only_in_decides_all_clear() {
        let board = filled_board(4, 8, &[7]);
        assert!(board.filled_only_in(&[7]));

        let mut board = filled_board(4, 8, &[7]);
        board.set(0, 3, Some(PieceKind::J));
        assert!(!board.filled_only_in(&[7]));
    }
}
