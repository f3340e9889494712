//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework state. It maps
//! `crossterm` key events into [`crate::types::GameAction`] for gameplay and into
//! [`MenuInput`] for menu screens. Turn requests are coalesced by the game state,
//! so no repeat handling is needed here.

pub mod map;

pub use snake_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuInput};
