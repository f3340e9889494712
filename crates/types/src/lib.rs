//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small conversions, making them
//! usable in any context (core logic, terminal rendering, headless observers).
//!
//! # Playfield
//!
//! The playfield is measured in pixels and divided into square cells:
//!
//! - **Width**: 600 px (30 cells)
//! - **Height**: 600 px (30 cells)
//! - **Cell size**: 20 px; every [`Position`] is a multiple of it
//! - **Start**: a 3-segment horizontal snake with its head at (300, 300), moving right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 120 | Tick interval at level 1 |
//! | `MIN_SPEED_MS` | 40 | Fastest possible tick interval |
//! | `SPEED_STEP_MS` | 15 | Interval reduction per level |
//! | `SMOOTH_SUBSTEPS` | 3 | Visual frames per logical tick |
//! | `LEVEL_UP_BANNER_MS` | 1500 | "LEVEL N!" banner duration |
//! | `BADGE_NOTICE_BASE_MS` | 3000 | Badge notification base duration |
//!
//! # Progression
//!
//! `level = score / LEVEL_THRESHOLD + 1` and
//! `speed = max(MIN_SPEED_MS, initial - (level - 1) * SPEED_STEP_MS)`.
//!
//! # Examples
//!
//! ```
//! use snake_types::{Direction, GameConfig, Position, CELL_SIZE};
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! let head = Position::new(300, 300);
//! assert_eq!(head.step(Direction::Right, CELL_SIZE), Position::new(320, 300));
//!
//! let config = GameConfig::default().with_initial_speed(200);
//! assert_eq!(config.initial_speed_ms, 160);
//! ```

use serde::Serialize;

/// Playfield width in pixels.
pub const GRID_WIDTH_PX: i32 = 600;

/// Playfield height in pixels.
pub const GRID_HEIGHT_PX: i32 = 600;

/// Side length of one grid cell in pixels.
pub const CELL_SIZE: i32 = 20;

/// Tick interval at level 1 (higher is slower).
pub const INITIAL_SPEED_MS: u32 = 120;

/// Fastest tick interval reachable through level progression.
pub const MIN_SPEED_MS: u32 = 40;

/// Tick interval reduction per level gained.
pub const SPEED_STEP_MS: u32 = 15;

/// Points needed to advance one level.
pub const LEVEL_THRESHOLD: u32 = 5;

/// Visual sub-steps rendered per logical tick.
pub const SMOOTH_SUBSTEPS: u32 = 3;

/// Settings slider lower bound for the initial speed.
pub const SPEED_SLIDER_MIN_MS: u32 = 80;

/// Settings slider upper bound for the initial speed.
pub const SPEED_SLIDER_MAX_MS: u32 = 160;

/// Settings slider increment.
pub const SPEED_SLIDER_STEP_MS: u32 = 5;

/// Random food placement attempts before falling back to a linear scan.
pub const MAX_FOOD_ATTEMPTS: u32 = 1000;

/// Duration of the "LEVEL N!" banner.
pub const LEVEL_UP_BANNER_MS: u32 = 1500;

/// Base display time of a badge notification.
pub const BADGE_NOTICE_BASE_MS: u32 = 3000;

/// Extra display time per badge priority step (priority = level / 2).
pub const BADGE_NOTICE_PRIORITY_MS: u32 = 500;

/// Initial snake body, head first.
pub const START_SNAKE: [Position; 3] = [
    Position::new(300, 300),
    Position::new(280, 300),
    Position::new(260, 300),
];

/// Initial heading.
pub const START_DIRECTION: Direction = Direction::Right;

/// Grid-aligned position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `dir`.
    pub fn step(self, dir: Direction, cell_size: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Snake heading.
///
/// Screen coordinates: `Up` decreases y, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction a snake can never turn into in a single tick.
    ///
    /// ```
    /// use snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in cell units.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Input intents that can be applied to a game session.
///
/// These are produced by the key mapper and by scripted controllers alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a heading change, applied on the next tick
    Turn(Direction),
    /// Toggle between running and paused
    TogglePause,
    /// Discard the current session and start a fresh one
    Restart,
}

/// Session lifecycle.
///
/// `Ready -> Running -> {Paused <-> Running} -> GameOver -> Ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverCause {
    /// The head left the playfield
    Wall,
    /// The head entered a cell occupied by the body
    SelfCollision,
    /// The snake covers every cell, so no food can be placed
    BoardFull,
}

/// Cosmetic milestone unlocked on reaching `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    pub level: u32,
    pub name: &'static str,
    /// 0xRRGGBB
    pub color: u32,
    pub symbol: &'static str,
}

/// Core-side notifications emitted during a tick, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    FoodEaten { score: u32 },
    LevelUp { level: u32, speed_ms: u32 },
    BadgeUnlocked { badge: Badge },
    GameOver { cause: GameOverCause, score: u32, level: u32 },
}

/// Session boundary values, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub initial_speed_ms: u32,
    pub min_speed_ms: u32,
    pub speed_step_ms: u32,
    pub level_threshold: u32,
    pub substeps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH_PX,
            height: GRID_HEIGHT_PX,
            cell_size: CELL_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            speed_step_ms: SPEED_STEP_MS,
            level_threshold: LEVEL_THRESHOLD,
            substeps: SMOOTH_SUBSTEPS,
        }
    }
}

impl GameConfig {
    /// Set the initial speed, clamped to the settings slider range.
    pub fn with_initial_speed(mut self, ms: u32) -> Self {
        self.initial_speed_ms = ms.clamp(SPEED_SLIDER_MIN_MS, SPEED_SLIDER_MAX_MS);
        self
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_snake_is_cell_aligned_and_inside_grid() {
        for p in START_SNAKE {
            assert_eq!(p.x % CELL_SIZE, 0);
            assert_eq!(p.y % CELL_SIZE, 0);
            assert!(p.x >= 0 && p.x < GRID_WIDTH_PX);
            assert!(p.y >= 0 && p.y < GRID_HEIGHT_PX);
        }
    }

    #[test]
    fn start_snake_trails_behind_start_direction() {
        let [head, neck, _] = START_SNAKE;
        assert_eq!(neck.step(START_DIRECTION, CELL_SIZE), head);
    }

    #[test]
    fn config_clamps_initial_speed_to_slider_range() {
        let cfg = GameConfig::default().with_initial_speed(10);
        assert_eq!(cfg.initial_speed_ms, SPEED_SLIDER_MIN_MS);
        let cfg = GameConfig::default().with_initial_speed(999);
        assert_eq!(cfg.initial_speed_ms, SPEED_SLIDER_MAX_MS);
        let cfg = GameConfig::default().with_initial_speed(135);
        assert_eq!(cfg.initial_speed_ms, 135);
    }

    #[test]
    fn config_cell_counts() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.columns(), 30);
        assert_eq!(cfg.rows(), 30);
    }
}
