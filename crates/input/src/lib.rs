//! Input decoding (engine-facing).
//!
//! The engine only consumes [`crate::types::Intent`] values. This crate turns
//! raw key input into intents: `crossterm` key events for the terminal runner
//! and DOM-style numeric key codes for drivers that receive browser events.
//! Anything unrecognized decodes to `None` and never reaches the engine.

pub mod map;

pub use frame_tetris_types as types;

pub use map::{handle_key_event, intent_from_key_code, is_restart, should_quit};
