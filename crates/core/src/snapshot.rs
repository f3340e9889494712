use serde::Serialize;

use crate::types::{Badge, Direction, GameOverCause, Phase, Position};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub phase: Phase,
    pub game_over_cause: Option<GameOverCause>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed_ms: u32,
    pub badges: Vec<Badge>,
    pub episode_id: u32,
    pub tick: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = None;
        self.direction = Direction::Right;
        self.phase = Phase::Ready;
        self.game_over_cause = None;
        self.score = 0;
        self.high_score = 0;
        self.level = 1;
        self.speed_ms = 0;
        self.badges.clear();
        self.episode_id = 0;
        self.tick = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn latest_badge(&self) -> Option<&Badge> {
        self.badges.last()
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            phase: Phase::Ready,
            game_over_cause: None,
            score: 0,
            high_score: 0,
            level: 1,
            speed_ms: 0,
            badges: Vec::new(),
            episode_id: 0,
            tick: 0,
        };
        s.clear();
        s
    }
}
