//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would lie outside the board.
    #[error("the ship does not fit on the board at the requested position")]
    InvalidPosition,
    /// The ship would overlap or touch a ship that was already placed.
    #[error("the requested position overlaps or touches another ship")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(crate) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the [`Ship`] whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is outside the board")]
    InvalidPosition,

    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    #[source]
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
