//! Color given to cells that come alive.
//!
//! A live color is a function of position, so the solid white classic look and
//! the positional gradient share one contract.

use super::{Cell, Position};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiveColor {
    /// Every newborn cell gets the same color
    Solid(Cell),
    /// Red follows x, green follows y, blue fills the remainder
    Gradient,
}

impl LiveColor {
    /// Color for a cell born at `pos` in a grid of `size`
    pub fn color_at(&self, pos: Position, size: (usize, usize)) -> Cell {
        match *self {
            LiveColor::Solid(cell) => cell,
            LiveColor::Gradient => {
                let (width, height) = size;
                let r = pos.x as f32 / width.max(1) as f32;
                let g = pos.y as f32 / height.max(1) as f32;
                // r and g stay below 1 on-grid, so blue is always lit
                let b = 1.0 - (r + g) / 2.0;
                Cell::new(r, g, b, 1.0)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LiveColor::Solid(_) => "Solid",
            LiveColor::Gradient => "Gradient",
        }
    }
}

impl Default for LiveColor {
    fn default() -> Self {
        LiveColor::Solid(Cell::LIVE)
    }
}
