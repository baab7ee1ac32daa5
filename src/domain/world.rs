//! Double-buffered simulation world.
//!
//! Two equally sized grids ping-pong between the "front" role (read, painted,
//! rendered) and the "back" role (written by the next generation). Swapping
//! flips an index; buffer contents are never copied.

use super::{Cell, Grid, LiveColor, Rule};
use crate::error::GridError;

/// Compute the next generation of `front` into `back`.
///
/// Reads only from `front` and writes every cell of `back` exactly once, so no
/// cell's result depends on another cell's result from the same tick.
pub fn advance_generation(
    front: &Grid,
    back: &mut Grid,
    rule: &dyn Rule,
    live_color: &LiveColor,
) -> Result<(), GridError> {
    let size = front.size();
    if back.size() != size {
        return Err(GridError::SizeMismatch {
            expected: size,
            found: back.size(),
        });
    }

    for ((pos, current), slot) in front.iter_cells().zip(back.cells_mut()) {
        let neighbors = front.count_alive_neighbors(pos);
        *slot = if rule.next_state(current.is_alive(), neighbors) {
            live_color.color_at(pos, size)
        } else {
            Cell::DEAD
        };
    }
    Ok(())
}

/// World owns both buffers and remembers which one is front.
#[derive(Clone, Debug)]
pub struct World {
    buffers: [Grid; 2],
    front: usize,
}

impl World {
    /// Allocate both buffers, filled with the dead color
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffers: [Grid::new(width, height), Grid::new(width, height)],
            front: 0,
        }
    }

    /// Build from two explicit buffers, `front` first
    #[cfg(test)]
    pub(crate) fn from_buffers(front: Grid, back: Grid) -> Self {
        Self {
            buffers: [front, back],
            front: 0,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        self.front().size()
    }

    /// The authoritative grid. Fetch it fresh each time; it changes on swap.
    pub fn front(&self) -> &Grid {
        &self.buffers[self.front]
    }

    /// Mutable front grid for paint/erase between ticks
    pub fn front_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.front]
    }

    pub fn back(&self) -> &Grid {
        &self.buffers[1 - self.front]
    }

    /// Exchange the roles of the two buffers
    pub fn swap(&mut self) {
        self.front = 1 - self.front;
    }

    /// Split borrow: (front, back)
    fn split(&mut self) -> (&Grid, &mut Grid) {
        let [first, second] = &mut self.buffers;
        if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Run one tick: fill the back buffer with the next generation, then swap.
    /// On error nothing is swapped and the front grid is unchanged.
    pub fn step(&mut self, rule: &dyn Rule, live_color: &LiveColor) -> Result<(), GridError> {
        let (front, back) = self.split();
        advance_generation(front, back, rule, live_color)?;
        self.swap();
        Ok(())
    }

    /// Reset both buffers to dead
    pub fn clear(&mut self) {
        self.buffers.iter_mut().for_each(|grid| grid.fill(Cell::DEAD));
    }
}
