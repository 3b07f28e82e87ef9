//! Read-only per-frame view of the engine for renderers and drivers.

use serde::{Serialize, Serializer};

use crate::game_state::Tetromino;
use crate::pieces::ShapeMatrix;
use crate::types::{PieceKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: PieceKind,
    #[serde(serialize_with = "serialize_matrix")]
    pub matrix: ShapeMatrix,
    pub row: i32,
    pub col: i32,
}

impl ActiveSnapshot {
    /// Playfield coordinates `(row, col)` of every block, including ones above row 0
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .filled_cells()
            .map(|(r, c)| (self.row + r as i32, self.col + c as i32))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// `0` empty, otherwise [`PieceKind::code`]
    pub board: [[u8; PLAYFIELD_WIDTH]; PLAYFIELD_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub frame_count: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Locked piece at (row, col), if any
    pub fn locked_at(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|code| PieceKind::from_code(*code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; PLAYFIELD_WIDTH]; PLAYFIELD_HEIGHT],
            active: None,
            game_over: false,
            frame_count: 0,
        }
    }
}

fn serialize_kind<S: Serializer>(kind: &PieceKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_str())
}

fn serialize_matrix<S: Serializer>(matrix: &ShapeMatrix, serializer: S) -> Result<S::Ok, S::Error> {
    matrix.to_rows().serialize(serializer)
}
