//! Pieces module - shape catalog and matrix rotation
//!
//! Every piece is described by a square boolean matrix in its base orientation.
//! Rotation is a pure transform over that matrix; there is no rotation state
//! and no wall kick table. A rotation that collides is simply rejected by the
//! caller.

use crate::types::PieceKind;

/// Largest matrix side used by any piece (the I piece)
pub const MAX_MATRIX_SIZE: usize = 4;

/// A square shape matrix of side 2, 3 or 4.
///
/// Storage is a fixed 4x4 array; only the top-left `size x size` block is
/// meaningful and everything outside it stays `false`. The side length is fixed
/// at construction, so a matrix can never become non-square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from `0`/`1` rows. The row count is the side length.
    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Base orientation for a piece kind
    pub fn base(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::Z => Z_SHAPE,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at `(row, col)` is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Iterate `(row, col)` of every filled cell, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }

    /// Rotate 90° clockwise. See [`rotate`].
    pub fn rotated(&self) -> Self {
        rotate(self)
    }

    /// Rows as `0`/`1` values, for snapshots and debugging.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        (0..n)
            .map(|r| (0..n).map(|c| self.cells[r][c] as u8).collect())
            .collect()
    }
}

/// Rotate an NxN matrix 90° clockwise.
///
/// The output cell `(i, j)` is the input cell `(N-1-j, i)`.
pub fn rotate(matrix: &ShapeMatrix) -> ShapeMatrix {
    let n = matrix.size();
    let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = matrix.cells[n - 1 - j][i];
        }
    }
    ShapeMatrix {
        size: matrix.size,
        cells,
    }
}

const I_SHAPE: ShapeMatrix =
    ShapeMatrix::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);

const J_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);

const L_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);

const O_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1], [1, 1]]);

const S_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);

const T_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

/// Shorthand for [`ShapeMatrix::base`]
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    ShapeMatrix::base(kind)
}
