use super::{Cell, Position, position::NEIGHBOR_OFFSETS};
use crate::error::GridError;
use rand::Rng;

/// Grid is a fixed-size, row-major array of colored cells.
/// Dimensions are set at construction and never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Convert a position to its linear index, refusing anything off-grid
    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y as usize * self.width + pos.x as usize)
    }

    pub fn get(&self, pos: Position) -> Result<Cell, GridError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count alive cells among the up-to-8 neighbors of `pos`.
    /// Off-grid neighbors are skipped, so edges and corners see fewer candidates.
    pub fn count_alive_neighbors(&self, pos: Position) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&offset| pos + offset)
            .filter_map(|neighbor| self.get(neighbor).ok())
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Raw row-major storage, for the generation writer
    pub(super) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Overwrite every cell with `cell`
    pub fn fill(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    /// Replace this grid's contents with another grid of the same size
    pub fn copy_from(&mut self, other: &Grid) -> Result<(), GridError> {
        if self.size() != other.size() {
            return Err(GridError::SizeMismatch {
                expected: self.size(),
                found: other.size(),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Seed each cell alive with probability `density`, painting with `live`
    pub fn randomize<R: Rng>(
        &mut self,
        rng: &mut R,
        density: f64,
        live: impl Fn(Position) -> Cell,
    ) {
        let density = density.clamp(0.0, 1.0);
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let pos = Position::new((idx % width) as i32, (idx / width) as i32);
            *cell = if rng.random_bool(density) {
                live(pos)
            } else {
                Cell::DEAD
            };
        }
    }

    /// Every position in the grid, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
