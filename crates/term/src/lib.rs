//! Terminal rendering collaborator.
//!
//! Renders engine snapshots into a character framebuffer and flushes that
//! framebuffer to the terminal with `crossterm`. Nothing here mutates game
//! state: the view only ever reads a [`core::GameSnapshot`].

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use frame_tetris_core as core;
pub use frame_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
