//! Grid module - playfield bounds and cell enumeration
//!
//! Positions are stored in pixels, so a cell is addressed by its top-left corner.
//! Coordinates: x grows left to right, y grows top to bottom; (0, 0) is the top-left cell.

use crate::rng::SimpleRng;
use crate::types::{GameConfig, Position};

/// The playfield: `columns x rows` cells of `cell_size` pixels each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size: cell_size.max(1),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    /// Check if a position lies inside the playfield
    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Inside the playfield and on a cell corner
    pub fn is_cell(&self, pos: Position) -> bool {
        self.contains(pos) && pos.x % self.cell_size == 0 && pos.y % self.cell_size == 0
    }

    /// Position of the cell at (`col`, `row`)
    pub fn cell(&self, col: i32, row: i32) -> Position {
        Position::new(col * self.cell_size, row * self.cell_size)
    }

    /// Column/row of a position
    pub fn cell_index(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }

    /// Uniformly random cell
    pub fn random_cell(&self, rng: &mut SimpleRng) -> Position {
        let col = rng.next_range(self.columns().max(1) as u32) as i32;
        let row = rng.next_range(self.rows().max(1) as u32) as i32;
        self.cell(col, row)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.columns();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| self.cell(col, row)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.columns(), 30);
        assert_eq!(grid.rows(), 30);
        assert_eq!(grid.cell_count(), 900);
    }

    #[test]
    fn test_contains_edges() {
        let grid = Grid::default();
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(580, 580)));
        assert!(!grid.contains(Position::new(600, 0)));
        assert!(!grid.contains(Position::new(0, 600)));
        assert!(!grid.contains(Position::new(-20, 0)));
        assert!(!grid.contains(Position::new(0, -20)));
    }

    #[test]
    fn test_is_cell_requires_alignment() {
        let grid = Grid::default();
        assert!(grid.is_cell(Position::new(0, 0)));
        assert!(grid.is_cell(Position::new(580, 580)));
        assert!(!grid.is_cell(Position::new(10, 0)));
        assert!(!grid.is_cell(Position::new(600, 0)));
    }

    #[test]
    fn test_cells_enumerates_row_major() {
        let grid = Grid::new(60, 40, 20);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(20, 0),
                Position::new(40, 0),
                Position::new(0, 20),
                Position::new(20, 20),
                Position::new(40, 20),
            ]
        );
    }

    #[test]
    fn test_random_cell_is_aligned_and_inside() {
        let grid = Grid::default();
        let mut rng = SimpleRng::new(3);
        for _ in 0..2000 {
            let p = grid.random_cell(&mut rng);
            assert!(grid.contains(p));
            assert_eq!(p.x % grid.cell_size(), 0);
            assert_eq!(p.y % grid.cell_size(), 0);
        }
    }

    #[test]
    fn test_cell_index_round_trip() {
        let grid = Grid::default();
        assert_eq!(grid.cell_index(grid.cell(7, 11)), (7, 11));
    }
}
