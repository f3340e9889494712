//! Greedy controller used by the `autoplay` binary.
//!
//! Heads for the food by Manhattan distance, never reverses and never steps
//! into a wall or any body segment, tail included. It does not plan ahead, so
//! it eventually traps itself.

use crate::core::GameState;
use crate::types::{Direction, Position};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Pick the heading for the next tick, or `None` if every move is fatal.
pub fn choose_direction(game: &GameState) -> Option<Direction> {
    let head = game.snake().head()?;
    let current = game.direction();
    let cell = game.grid().cell_size();
    let target = game.food().unwrap_or(head);

    DIRECTIONS
        .iter()
        .copied()
        .filter(|&d| d != current.opposite())
        .map(|d| (d, head.step(d, cell)))
        .filter(|&(_, next)| is_safe(game, next))
        // Prefer the current heading on ties so the snake does not zigzag.
        .min_by_key(|&(d, next)| (distance(next, target), d != current))
        .map(|(d, _)| d)
}

fn is_safe(game: &GameState, next: Position) -> bool {
    if !game.grid().contains(next) {
        return false;
    }
    // The head is checked before the tail moves, so the tail cell is fatal.
    !game.snake().contains(next)
}

fn distance(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
