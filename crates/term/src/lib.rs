//! Terminal rendering for the Snake game.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and [`TerminalRenderer`] flushes only the cells that changed.
//! No widget toolkit is involved, which keeps the board's 2x1 cell aspect and
//! the per-frame animations under direct control.
//!
//! - [`game_view`]: board, snake, food pulse, HUD, toasts and dialog overlay
//! - [`menu_view`]: main menu, achievements list, settings slider
//! - [`panel`]: boxed dialog used for the pause menu and game-over screen
//! - [`toast`]: timed level-up banner and badge notification state
//! - [`throttle`]: skip redraws of static screens

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod panel;
pub mod renderer;
pub mod theme;
pub mod throttle;
pub mod toast;

pub use snake_core as core;
pub use snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameScene, GameView, Viewport};
pub use menu_view::MenuView;
pub use panel::Panel;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::RenderThrottle;
pub use toast::Toasts;
