//! Frame-stepped Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `frame_tetris::{core,input,term,types}` and
//! hosts the pieces shared by the two binaries: argument parsing ([`config`])
//! and the line-oriented driver ([`script`]).

pub mod config;
pub mod script;

pub use frame_tetris_core as core;
pub use frame_tetris_input as input;
pub use frame_tetris_term as term;
pub use frame_tetris_types as types;
