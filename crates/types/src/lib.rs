//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the key decoder and the renderer alike.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, row 0 at the top)
//!
//! Pieces may hang above row 0 while spawning; those cells are never stored.
//!
//! # Frame Timing
//!
//! The engine is frame-driven rather than millisecond-driven:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_FRAMES` | 35 | Gravity fires once the frame counter exceeds this |
//! | `FRAME_MS` | 16 | Default frame interval used by the terminal runner |
//!
//! # Examples
//!
//! ```
//! use frame_tetris_types::{Intent, PieceKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
//! assert_eq!(PLAYFIELD_WIDTH, 10);
//! assert_eq!(PLAYFIELD_HEIGHT, 22);
//! ```

/// Playfield width in cells (10 columns)
pub const PLAYFIELD_WIDTH: usize = 10;

/// Playfield height in cells (22 rows)
pub const PLAYFIELD_HEIGHT: usize = 22;

/// Number of `step` calls the frame counter must exceed before gravity fires
pub const GRAVITY_FRAMES: u32 = 35;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// The seven tetromino piece kinds
///
/// Each piece has a fixed base matrix and color:
/// - **I**: Cyan, 4x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order. A fresh bag starts from this order before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, as used on the playfield
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Compact cell code used by snapshots (`0` is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Display color of locked and falling blocks of this kind
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::T => PieceColor::Purple,
            PieceKind::S => PieceColor::Green,
            PieceKind::Z => PieceColor::Red,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
        }
    }
}

/// Named block colors. Renderers pick the concrete RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
        }
    }
}

/// A cell on the playfield
///
/// Emptiness is an explicit variant; a row is full when no cell is [`Cell::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Piece kind that locked into this cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(*kind),
        }
    }

    /// Snapshot code: `0` for empty, otherwise [`PieceKind::code`]
    pub fn code(&self) -> u8 {
        self.kind().map_or(0, |kind| kind.code())
    }
}

/// Decoded player intents
///
/// These are the only inputs the engine consumes besides the frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    RotateCw,
    /// Drop piece one row, locking it if it cannot move
    SoftDrop,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("rotateCw"), Some(Intent::RotateCw));
    /// assert_eq!(Intent::from_str("SOFTDROP"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "rotatecw" => Some(Intent::RotateCw),
            "softdrop" => Some(Intent::SoftDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::RotateCw => "rotateCw",
            Intent::SoftDrop => "softDrop",
        }
    }
}

/// Result of locking the active piece into the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// The piece was written into the playfield and full rows were removed.
    Locked { lines_cleared: u8 },
    /// Some block of the piece sat too high to lock; nothing was written.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_roundtrip_through_cells() {
        for kind in PieceKind::ALL {
            let cell = Cell::Occupied(kind);
            assert_eq!(PieceKind::from_code(cell.code()), Some(kind));
        }
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(PieceKind::from_code(0), None);
    }

    #[test]
    fn colors_follow_classic_palette() {
        assert_eq!(PieceKind::I.color().as_str(), "cyan");
        assert_eq!(PieceKind::O.color().as_str(), "yellow");
        assert_eq!(PieceKind::T.color().as_str(), "purple");
        assert_eq!(PieceKind::S.color().as_str(), "green");
        assert_eq!(PieceKind::Z.color().as_str(), "red");
        assert_eq!(PieceKind::J.color().as_str(), "blue");
        assert_eq!(PieceKind::L.color().as_str(), "orange");
    }

    #[test]
    fn cell_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(Cell::Occupied(PieceKind::Z).is_occupied());
        assert_eq!(Cell::Occupied(PieceKind::Z).kind(), Some(PieceKind::Z));
    }

    #[test]
    fn intent_names_roundtrip() {
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::RotateCw,
            Intent::SoftDrop,
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }
}
