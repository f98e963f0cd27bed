//! The atomic unit of a board.
use enumflags2::BitFlags;

use crate::board::Coordinate;

/// Marks that can be set on a [`Cell`] besides its occupant.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum CellFlag {
    /// A shot has been fired at the cell.
    Shot = 0b001,
    /// The cell touches a ship. No other ship may be placed on it.
    Buffer = 0b010,
    /// The buffer cell nearest to a ship's anchor. Only of interest for display.
    BufferOrigin = 0b100,
}

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cell {
    coord: Coordinate,
    /// Index of the placed ship that occupies this cell, if any.
    ship: Option<usize>,
    flags: BitFlags<CellFlag>,
}

impl Cell {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            ship: None,
            flags: BitFlags::empty(),
        }
    }

    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether part of a ship sits on this cell.
    pub fn occupied(&self) -> bool {
        self.ship.is_some()
    }

    /// Whether this cell has been shot previously.
    pub fn shot(&self) -> bool {
        self.flags.contains(CellFlag::Shot)
    }

    /// Whether this cell is part of the spacing ring around a ship.
    pub fn buffer(&self) -> bool {
        self.flags.contains(CellFlag::Buffer)
    }

    /// Whether this is the buffer cell closest to the anchor of the ship that marked it.
    pub fn buffer_origin(&self) -> bool {
        self.flags.contains(CellFlag::BufferOrigin)
    }

    /// Index into [`Board::ships`][crate::board::Board::ships] of the occupant.
    pub fn ship_index(&self) -> Option<usize> {
        self.ship
    }

    /// A cell can take a new ship only if nothing sits on or next to it.
    pub(crate) fn available(&self) -> bool {
        !self.occupied() && !self.buffer()
    }

    pub(crate) fn occupy(&mut self, ship: usize) {
        self.ship = Some(ship);
    }

    pub(crate) fn mark(&mut self, flag: CellFlag) {
        self.flags.insert(flag);
    }
}
