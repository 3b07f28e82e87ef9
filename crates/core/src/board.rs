//! Board module - the playfield grid
//!
//! The playfield is a 10x22 grid where each cell is empty or holds the kind of
//! the piece that locked there. Storage is a flat array for cache locality and
//! zero allocation.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Positions are signed so a
//! piece anchored above the field can still be tested: cells above row 0 are
//! treated as open space, every other edge is a wall.

use crate::pieces::ShapeMatrix;
use crate::types::{Cell, LockOutcome, PieceKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Total number of cells on the playfield
const PLAYFIELD_SIZE: usize = PLAYFIELD_WIDTH * PLAYFIELD_HEIGHT;

/// The playfield - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; PLAYFIELD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; PLAYFIELD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= PLAYFIELD_HEIGHT as i32 || col >= PLAYFIELD_WIDTH as i32 {
            return None;
        }
        Some(row as usize * PLAYFIELD_WIDTH + col as usize)
    }

    pub fn width(&self) -> usize {
        PLAYFIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        PLAYFIELD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// One row of cells, top row first
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * PLAYFIELD_WIDTH;
        &self.cells[start..start + PLAYFIELD_WIDTH]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(PLAYFIELD_WIDTH)
    }

    /// Check whether `matrix` anchored at (row, col) fits.
    ///
    /// A placement is rejected when any filled cell lands left of column 0,
    /// right of the last column, at or below the floor, or on an occupied
    /// cell. Cells above row 0 are not checked against anything.
    pub fn is_valid_position(&self, matrix: &ShapeMatrix, row: i32, col: i32) -> bool {
        matrix.filled_cells().all(|(r, c)| {
            let target_row = row + r as i32;
            let target_col = col + c as i32;

            if target_col < 0 || target_col >= PLAYFIELD_WIDTH as i32 {
                return false;
            }
            if target_row >= PLAYFIELD_HEIGHT as i32 {
                return false;
            }
            // Above the field: open space.
            self.get(target_row, target_col)
                .map_or(true, |cell| cell.is_empty())
        })
    }

    /// Lock a piece into the grid, then remove full rows.
    ///
    /// Any filled cell with `row + r - 1 < 0` ends the game; in that case the
    /// playfield is left untouched.
    pub fn lock_and_clear(
        &mut self,
        matrix: &ShapeMatrix,
        row: i32,
        col: i32,
        kind: PieceKind,
    ) -> LockOutcome {
        if matrix.filled_cells().any(|(r, _)| row + r as i32 - 1 < 0) {
            return LockOutcome::GameOver;
        }

        for (r, c) in matrix.filled_cells() {
            self.set(row + r as i32, col + c as i32, Cell::Occupied(kind));
        }

        LockOutcome::Locked {
            lines_cleared: self.clear_full_rows(),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= PLAYFIELD_HEIGHT {
            return false;
        }
        self.row(row).iter().all(Cell::is_occupied)
    }

    /// Clear a row and shift all rows above it down by one.
    /// The top row becomes empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= PLAYFIELD_HEIGHT {
            return;
        }

        let width = PLAYFIELD_WIDTH;
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells.copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(Cell::Empty);
    }

    /// Remove every full row, scanning bottom to top.
    ///
    /// After a clear the same index is checked again, since the row above has
    /// just moved into it. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u8 {
        let mut cleared = 0u8;
        let mut row = PLAYFIELD_HEIGHT;

        while row > 0 {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Flat view of the grid, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Snapshot grid: `0` empty, otherwise the piece code
    pub fn write_code_grid(&self, out: &mut [[u8; PLAYFIELD_WIDTH]; PLAYFIELD_HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.code();
            }
        }
    }

    /// Build a playfield from text rows (`.` empty, a piece letter occupied).
    ///
    /// Rows are bottom-aligned: fewer than 22 lines fill the lowest rows.
    /// Any other character or an over-long line yields `None`.
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        if rows.len() > PLAYFIELD_HEIGHT {
            return None;
        }

        let mut field = Self::new();
        let top = PLAYFIELD_HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            if line.chars().count() > PLAYFIELD_WIDTH {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    other => Cell::Occupied(PieceKind::from_str(&other.to_string())?),
                };
                field.set((top + i) as i32, c as i32, cell);
            }
        }
        Some(field)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
