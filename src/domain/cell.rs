/// Cell is a single RGBA color in the grid.
/// Each channel is a float in [0, 1]; liveness is derived from the color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Cell {
    /// Canonical dead cell: opaque black
    pub const DEAD: Cell = Cell::new(0.0, 0.0, 0.0, 1.0);

    /// Canonical live cell: opaque white
    pub const LIVE: Cell = Cell::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A cell is alive when any color channel is lit. Alpha does not count.
    pub fn is_alive(self) -> bool {
        self.r > 0.0 || self.g > 0.0 || self.b > 0.0
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::DEAD
    }
}
