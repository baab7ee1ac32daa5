use std::ops::Add;

/// Integer grid coordinate. Signed so neighbor offsets can step off the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The eight 8-connected neighbor offsets
pub const NEIGHBOR_OFFSETS: [Position; 8] = [
    Position::new(-1, -1),
    Position::new(0, -1),
    Position::new(1, -1),
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
];
