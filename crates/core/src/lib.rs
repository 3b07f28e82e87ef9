//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block engine: the playfield, the piece
//! catalog, the 7-bag randomizer and the per-frame / per-intent transition
//! rules. It performs no I/O and knows nothing about rendering or input
//! devices.
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 playfield with collision testing, lock-in and row clears
//! - [`game_state`]: the [`Engine`] and the active [`Tetromino`]
//! - [`pieces`]: square shape matrices and 90° rotation
//! - [`rng`]: 7-bag randomizer
//! - [`snapshot`]: copyable per-frame view for renderers
//!
//! # Rules
//!
//! - Gravity moves the piece one row each time the frame counter exceeds 35
//! - Left/right/rotate are applied only if the result fits; there are no wall kicks
//! - Soft drop moves one row per call and locks immediately when blocked
//! - Full rows are removed and everything above shifts down
//! - Locking a block into row 0 (or above) ends the game
//!
//! # Example
//!
//! ```
//! use frame_tetris_core::Engine;
//! use frame_tetris_types::Intent;
//!
//! let mut engine = Engine::new(12345);
//! let col = engine.tetromino().col;
//!
//! assert!(engine.apply_intent(Intent::MoveRight));
//! assert_eq!(engine.tetromino().col, col + 1);
//!
//! for _ in 0..36 {
//!     engine.step();
//! }
//! assert!(!engine.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use frame_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Playfield;
pub use game_state::{Engine, Tetromino};
pub use pieces::{get_shape, rotate, ShapeMatrix};
pub use rng::{shuffle, PieceBag};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
