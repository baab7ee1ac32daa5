use super::{Grid, LiveColor, Position};

/// A named arrangement of live cells, stamped onto the grid by the user
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<(i32, i32)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// "Name: description", for logs and status text
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }

    /// Stamp the pattern centered on `center`, colored by `live`.
    /// Cells falling off the grid are skipped. Returns how many were placed.
    pub fn place_on(&self, grid: &mut Grid, center: Position, live: &LiveColor) -> usize {
        let origin = Position::new(center.x - self.width / 2, center.y - self.height / 2);
        let size = grid.size();
        self.cells
            .iter()
            .map(|&offset| origin + Position::from(offset))
            .filter(|&pos| grid.set(pos, live.color_at(pos, size)).is_ok())
            .count()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Get all available patterns, in number-key order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, ConwayRule, World};

    #[test]
    fn test_dimensions_from_cells() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::blinker().height, 3);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(5, 5);
        let placed =
            presets::blinker().place_on(&mut grid, Position::new(2, 2), &LiveColor::default());
        assert_eq!(placed, 3);
        let alive: Vec<_> = grid.alive_positions().collect();
        let expected = [(2, 1), (2, 2), (2, 3)].map(Position::from);
        assert_eq!(alive, expected);
    }

    #[test]
    fn test_place_skips_off_grid_cells() {
        let mut grid = Grid::new(4, 4);
        let placed =
            presets::block().place_on(&mut grid, Position::new(0, 0), &LiveColor::default());
        // Origin lands at (-1, -1): only (0, 0) is on the grid
        assert_eq!(placed, 1);
        assert_eq!(grid.get(Position::new(0, 0)), Ok(Cell::LIVE));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut world = World::new(6, 6);
        let live = LiveColor::default();
        presets::block().place_on(world.front_mut(), Position::new(3, 3), &live);
        let before = world.front().clone();
        world.step(&ConwayRule, &LiveColor::default()).unwrap();
        assert_eq!(world.front(), &before);
    }

    #[test]
    fn test_summary_includes_description() {
        assert_eq!(presets::blinker().summary(), "Blinker: Oscillator (period 2)");
        for pattern in presets::all_patterns() {
            assert!(!pattern.description.is_empty(), "{} has no description", pattern.name);
        }
    }

    #[test]
    fn test_all_names_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
