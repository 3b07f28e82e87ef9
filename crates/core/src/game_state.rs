//! Game state module - the frame-driven engine
//!
//! This module ties together the playfield, the active piece and the bag.
//! A driver calls [`Engine::step`] once per frame and the intent methods once per
//! decoded key press. Both paths may lock the active piece, clear rows, spawn the
//! next piece or end the game. Once the game is over every call is a no-op.

use crate::board::Playfield;
use crate::pieces::ShapeMatrix;
use crate::rng::PieceBag;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current orientation, already rotated
    pub matrix: ShapeMatrix,
    /// Anchor of the matrix's top-left corner; negative rows are above the field
    pub row: i32,
    pub col: i32,
}

impl Tetromino {
    /// Create a tetromino at its spawn position.
    ///
    /// The column centers I and O and puts the 3-wide pieces left of center.
    /// I spawns at row 0, everything else at row 1.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = ShapeMatrix::base(kind);
        let col = (PLAYFIELD_WIDTH / 2) as i32 - matrix.size().div_ceil(2) as i32;
        let row = if kind == PieceKind::I { 0 } else { 1 };

        Self {
            kind,
            matrix,
            row,
            col,
        }
    }

    /// Check if the piece fits the playfield where it is
    pub fn is_valid(&self, playfield: &Playfield) -> bool {
        playfield.is_valid_position(&self.matrix, self.row, self.col)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    playfield: Playfield,
    tetromino: Tetromino,
    bag: PieceBag,
    /// Frames since gravity last fired
    frame_count: u32,
    game_over: bool,
}

impl Engine {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_bag(PieceBag::new(seed), Playfield::new())
    }

    /// Create a new game seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_bag(PieceBag::from_entropy(), Playfield::new())
    }

    /// Start from a prepared playfield; the first piece comes from the bag
    pub fn with_playfield(seed: u64, playfield: Playfield) -> Self {
        Self::with_bag(PieceBag::new(seed), playfield)
    }

    /// Start from a prepared playfield and a given active piece.
    ///
    /// Later spawns come from a bag seeded with `seed`.
    pub fn with_state(seed: u64, playfield: Playfield, tetromino: Tetromino) -> Self {
        Self {
            playfield,
            tetromino,
            bag: PieceBag::new(seed),
            frame_count: 0,
            game_over: false,
        }
    }

    fn with_bag(mut bag: PieceBag, playfield: Playfield) -> Self {
        let tetromino = Tetromino::spawn(bag.next_piece());
        Self {
            playfield,
            tetromino,
            bag,
            frame_count: 0,
            game_over: false,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn tetromino(&self) -> &Tetromino {
        &self.tetromino
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.playfield.write_code_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.tetromino));
        out.game_over = self.game_over;
        out.frame_count = self.frame_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one frame.
    ///
    /// Gravity fires when the frame counter exceeds [`GRAVITY_FRAMES`]; the
    /// counter resets and the piece moves down one row, or locks if it cannot.
    /// Returns the lock outcome when this frame locked a piece.
    pub fn step(&mut self) -> Option<LockOutcome> {
        if self.game_over {
            return None;
        }

        self.frame_count += 1;
        if self.frame_count <= GRAVITY_FRAMES {
            return None;
        }

        self.frame_count = 0;
        if self.try_move(1, 0) {
            return None;
        }
        Some(self.lock_active())
    }

    /// Apply a decoded intent. Returns whether the active piece moved or rotated.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::RotateCw => self.rotate(),
            Intent::SoftDrop => self.soft_drop(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        !self.game_over && self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        !self.game_over && self.try_move(0, 1)
    }

    /// Rotate clockwise in place. A colliding rotation is rejected; there are no kicks.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = Tetromino {
            matrix: self.tetromino.matrix.rotated(),
            ..self.tetromino
        };
        if !rotated.is_valid(&self.playfield) {
            return false;
        }

        self.tetromino = rotated;
        true
    }

    /// Move down one row, or lock immediately when the row below is blocked.
    ///
    /// Returns `false` when the piece locked instead of moving.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        if self.try_move(1, 0) {
            return true;
        }
        self.lock_active();
        false
    }

    /// Try to shift the active piece
    fn try_move(&mut self, d_row: i32, d_col: i32) -> bool {
        let moved = Tetromino {
            row: self.tetromino.row + d_row,
            col: self.tetromino.col + d_col,
            ..self.tetromino
        };
        if !moved.is_valid(&self.playfield) {
            return false;
        }

        self.tetromino = moved;
        true
    }

    /// Lock the active piece, then spawn the next one or end the game
    fn lock_active(&mut self) -> LockOutcome {
        let Tetromino {
            kind,
            matrix,
            row,
            col,
        } = self.tetromino;

        let outcome = self.playfield.lock_and_clear(&matrix, row, col, kind);
        match outcome {
            LockOutcome::GameOver => self.game_over = true,
            LockOutcome::Locked { .. } => {
                self.tetromino = Tetromino::spawn(self.bag.next_piece());
            }
        }
        outcome
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
