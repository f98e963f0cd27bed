//! Dimensions of the rectangular grid every board is played on.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Width of the standard board.
pub const BOARD_WIDTH: i32 = 10;
/// Height of the standard board.
pub const BOARD_HEIGHT: i32 = 10;

/// Offsets of the 8-neighbourhood of a cell, in row-major order.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Simple rectangular dimensions. The fleet composition assumes the classic 10x10 grid,
/// which is the only size a board can be built with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: i32,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: i32,
}

impl Dimensions {
    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Compute the linear total size of these [`Dimensions`].
    pub fn total_size(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Returns true if the given [`Coordinate`] lies on the grid.
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        0 <= c.x && c.x < self.width && 0 <= c.y && c.y < self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        let idx = idx as i32;
        Coordinate::new(idx % self.width, idx / self.width)
    }

    /// Iterate the in-bounds cells touching `coord`, including diagonals.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| coord.offset(dx, dy))
            .filter(move |c| dim.contains(c))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }
}

impl Default for Dimensions {
    /// Construct the standard rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}
