use core::fmt;
use grid_util::point::Point;

/// A cell on the grid, addressed as (row, column) with zero-based indices. Ordering is
/// row-major, which gives frontier structures a total order to fall back on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Absolute row and column offsets to `other`.
    pub fn delta(&self, other: &Position) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }

    /// Whether `other` is exactly one king move away.
    pub fn is_adjacent(&self, other: &Position, allow_diagonal: bool) -> bool {
        match self.delta(other) {
            (1, 0) | (0, 1) => true,
            (1, 1) => allow_diagonal,
            _ => false,
        }
    }

    /// A move is diagonal if it changes both row and column.
    pub fn is_diagonal_to(&self, other: &Position) -> bool {
        self.row != other.row && self.col != other.col
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

/// [Point] is (x, y), i.e. (col, row).
impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Position::new(p.y, p.x)
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point::new(p.col, p.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
