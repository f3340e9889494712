//! Food placement - uniform rejection sampling over free cells
//!
//! Sampling is capped at [`MAX_FOOD_ATTEMPTS`]; after that a row-major scan
//! returns the first free cell, so placement terminates even on a nearly full grid.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Position, MAX_FOOD_ATTEMPTS};

/// Pick a cell not covered by `snake`. Returns `None` only when every cell is covered.
pub fn place_food(grid: &Grid, snake: &Snake, rng: &mut SimpleRng) -> Option<Position> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = grid.random_cell(rng);
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    grid.cells().find(|&cell| !snake.contains(cell))
}
