//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Snake rules and session state machine. It has no
//! dependencies on terminals, input devices or clocks, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is exercised without a live terminal
//! - **Portable**: The same state drives the TUI and the headless observer
//!
//! # Module Structure
//!
//! - [`game_state`]: Session state machine (`Ready -> Running <-> Paused -> GameOver`)
//! - [`grid`]: Playfield bounds and cell enumeration
//! - [`snake`]: Ordered body segments, head first
//! - [`food`]: Rejection-sampled food placement
//! - [`progression`]: Level and speed formulas
//! - [`badges`]: Badge catalog and per-session achievements
//! - [`clock`]: Tick scheduler with visual sub-steps
//! - [`rng`]: Seeded LCG
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - One food per board; eating it scores 1 point and grows the snake by one segment
//! - Every `LEVEL_THRESHOLD` points raise the level, which shortens the tick interval
//! - Leaving the playfield or entering the body ends the session
//! - A turn request is applied on the next tick; reversing in place is ignored
//! - Reaching levels 2, 4, ... 20 unlocks a cosmetic badge
//!
//! # Example
//!
//! ```
//! use snake_core::{Advance, GameState};
//! use snake_types::{Direction, GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.start();
//!
//! game.apply_action(GameAction::Turn(Direction::Up));
//! assert_ne!(game.advance(), Advance::Idle);
//! assert_eq!(game.direction(), Direction::Up);
//! ```

pub mod badges;
pub mod clock;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod progression;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use snake_types as types;

// Re-export commonly used types for convenience
pub use badges::{notice_duration_ms, Achievements, BADGES};
pub use clock::{Pulse, TickClock};
pub use game_state::{Advance, GameState};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
