//! Storage for the cells of a board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Cell, Coordinate, Dimensions};

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size())
            .map(|i| Cell::new(dim.un_linearize(i)))
            .collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
