use std::fmt;

/// The coordinates of a [`Cell`][crate::board::Cell] in the board.
///
/// Coordinates are signed so that any position a player asks for can be represented and
/// then rejected by the board if it falls outside the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the coordinate shifted by the given offsets, or `None` if the result does not
    /// fit in an `i32`. Such a coordinate is off any board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Squared euclidean distance between two coordinates.
    pub fn distance_squared(self, other: Coordinate) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
