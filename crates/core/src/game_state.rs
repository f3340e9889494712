//! Game state module - manages the complete game session
//!
//! This module ties together the grid, snake body, RNG, progression formulas and
//! badge bookkeeping. It owns no timer: a driving loop calls [`GameState::advance`]
//! once per logical tick (see [`TickClock`](crate::clock::TickClock)).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, info};

use crate::badges::Achievements;
use crate::food::place_food;
use crate::grid::Grid;
use crate::progression::{level_for_score, speed_for};
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not running (ready, paused or over); nothing changed
    Idle,
    /// Moved one cell without growing
    Moved,
    /// Moved onto the food and grew by one segment
    Ate,
    /// The session ended; the snake was left untouched
    GameOver(GameOverCause),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    direction: Direction,
    /// Latest accepted turn request, applied on the next tick.
    pending_direction: Option<Direction>,
    food: Option<Position>,
    score: u32,
    /// Best score seen by this process; survives resets.
    high_score: u32,
    level: u32,
    speed_ms: u32,
    phase: Phase,
    game_over_cause: Option<GameOverCause>,
    achievements: Achievements,
    rng: SimpleRng,
    /// Monotonic session id (increments on every start).
    episode_id: u32,
    /// Ticks advanced in the current session.
    tick: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in [`Phase::Ready`].
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut state = Self {
            config,
            grid: Grid::from_config(&config),
            snake: Snake::new(START_SNAKE),
            direction: START_DIRECTION,
            pending_direction: None,
            food: None,
            score: 0,
            high_score: 0,
            level: 1,
            speed_ms: config.initial_speed_ms,
            phase: Phase::Ready,
            game_over_cause: None,
            achievements: Achievements::new(),
            rng: SimpleRng::new(seed),
            episode_id: 0,
            tick: 0,
            events: Vec::new(),
        };
        state.initialize();
        state
    }

    /// Create a ready session with a custom body (head first) and heading.
    ///
    /// Used for scripted scenarios. The default start is kept when `segments`
    /// is empty, leaves the grid, is off the cell lattice or repeats a cell.
    pub fn with_snake(
        config: GameConfig,
        seed: u32,
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Self {
        let mut state = Self::new(config, seed);
        let snake = Snake::new(segments);
        if state.is_valid_layout(&snake) {
            state.snake = snake;
            state.direction = direction;
            state.food = place_food(&state.grid, &state.snake, &mut state.rng);
        }
        state
    }

    fn is_valid_layout(&self, snake: &Snake) -> bool {
        !snake.is_empty()
            && snake
                .segments()
                .enumerate()
                .all(|(i, pos)| self.grid.is_cell(pos) && snake.segment_index(pos) == Some(i))
    }

    /// Reset the session to its start layout and enter [`Phase::Ready`].
    ///
    /// High score, RNG stream and episode counter carry over.
    pub fn initialize(&mut self) {
        self.snake = Snake::new(START_SNAKE);
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.level = 1;
        self.speed_ms = speed_for(&self.config, 1);
        self.achievements.clear();
        self.game_over_cause = None;
        self.tick = 0;
        self.events.clear();
        self.food = place_food(&self.grid, &self.snake, &mut self.rng);
        self.phase = Phase::Ready;
    }

    /// Ready -> Running. Picks up the configured initial speed.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.speed_ms = speed_for(&self.config, self.level);
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(
            episode = self.episode_id,
            speed_ms = self.speed_ms,
            "game started"
        );
        true
    }

    /// Any phase other than Ready -> fresh Ready session.
    pub fn reset(&mut self) -> bool {
        if self.phase == Phase::Ready {
            return false;
        }
        self.initialize();
        true
    }

    /// Reset and immediately start a new session.
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Escape-key semantics: only honored once a session is under way.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Ready | Phase::GameOver => false,
        }
    }

    /// Buffer a heading change for the next tick.
    ///
    /// A reversal of the current heading is ignored. Later requests replace
    /// earlier ones, so at most one turn happens per tick.
    pub fn request_direction_change(&mut self, dir: Direction) -> bool {
        if self.phase == Phase::GameOver || dir == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(dir);
        true
    }

    /// Change the settings-slider speed. Takes effect on the next start.
    pub fn set_initial_speed(&mut self, ms: u32) -> u32 {
        self.config = self.config.with_initial_speed(ms);
        self.config.initial_speed_ms
    }

    /// Place the food on a specific free cell. Returns false if the cell is
    /// outside the grid or covered by the snake.
    pub fn set_food(&mut self, pos: Position) -> bool {
        if !self.grid.contains(pos) || self.snake.contains(pos) {
            return false;
        }
        self.food = Some(pos);
        true
    }

    /// Advance the session by one logical tick.
    pub fn advance(&mut self) -> Advance {
        if self.phase != Phase::Running {
            return Advance::Idle;
        }

        if let Some(dir) = self.pending_direction.take() {
            if dir != self.direction.opposite() {
                self.direction = dir;
            }
        }

        let Some(head) = self.snake.head() else {
            return Advance::Idle;
        };
        let new_head = head.step(self.direction, self.grid.cell_size());

        if !self.grid.contains(new_head) {
            return self.end(GameOverCause::Wall);
        }
        if self.snake.contains(new_head) {
            return self.end(GameOverCause::SelfCollision);
        }

        self.snake.push_head(new_head);
        self.tick = self.tick.wrapping_add(1);
        debug!(tick = self.tick, x = new_head.x, y = new_head.y, "tick");

        if self.food == Some(new_head) {
            self.eat()
        } else {
            self.snake.pop_tail();
            Advance::Moved
        }
    }

    fn eat(&mut self) -> Advance {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        self.events.push(GameEvent::FoodEaten { score: self.score });

        let level = level_for_score(self.score, self.config.level_threshold);
        if level > self.level {
            self.level = level;
            self.speed_ms = speed_for(&self.config, level);
            debug!(level, speed_ms = self.speed_ms, "level up");
            self.events.push(GameEvent::LevelUp {
                level,
                speed_ms: self.speed_ms,
            });

            for badge in self.achievements.unlock_through(level) {
                info!(badge = badge.name, level = badge.level, "badge unlocked");
                self.events.push(GameEvent::BadgeUnlocked { badge });
            }
        }

        self.food = place_food(&self.grid, &self.snake, &mut self.rng);
        if self.food.is_none() {
            return self.end(GameOverCause::BoardFull);
        }
        Advance::Ate
    }

    fn end(&mut self, cause: GameOverCause) -> Advance {
        self.phase = Phase::GameOver;
        self.game_over_cause = Some(cause);
        self.pending_direction = None;
        info!(
            ?cause,
            score = self.score,
            level = self.level,
            high_score = self.high_score,
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.score,
            level: self.level,
        });
        Advance::GameOver(cause)
    }

    /// Apply an input intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.request_direction_change(dir),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over_cause
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food = self.food;
        out.direction = self.direction;
        out.phase = self.phase;
        out.game_over_cause = self.game_over_cause;
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.speed_ms = self.speed_ms;
        out.badges.clear();
        out.badges.extend_from_slice(self.achievements.as_slice());
        out.episode_id = self.episode_id;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Hash of the visible state without building a snapshot.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        for seg in self.snake.segments() {
            seg.hash(&mut h);
        }
        self.food.hash(&mut h);
        self.direction.hash(&mut h);
        self.phase.hash(&mut h);
        self.game_over_cause.hash(&mut h);
        self.score.hash(&mut h);
        self.high_score.hash(&mut h);
        self.level.hash(&mut h);
        self.speed_ms.hash(&mut h);
        self.achievements.as_slice().hash(&mut h);
        self.episode_id.hash(&mut h);
        self.tick.hash(&mut h);
        h.finish()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
