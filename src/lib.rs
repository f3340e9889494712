//! Snake TUI (workspace facade crate).
//!
//! Re-exports the game crates under `snake_tui::{core,input,term,types}` and
//! hosts the application layer shared by the binaries: configuration, logging,
//! the screen state machine and the autoplay controller.

pub mod app;
pub mod autopilot;
pub mod config;
pub mod logging;

pub use snake_core as core;
pub use snake_input as input;
pub use snake_term as term;
pub use snake_types as types;
