use thiserror::Error;

use crate::board::{CannotPlaceReason, CannotShootReason};

/// Why the match refused a placement or a shot. Every rejection leaves the match exactly
/// as it was, so the same request may simply be made again with different input.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// The coordinate, or part of the ship, lies outside the board.
    #[error("invalid position")]
    InvalidPosition,
    /// The ship would overlap or touch a ship that was already placed.
    #[error("there is already a ship at or next to that position")]
    AlreadyOccupied,
    /// That cell has been shot before.
    #[error("that cell was already shot")]
    AlreadyShot,
    /// No random layout of the whole fleet could be found.
    #[error("the fleet could not be placed at random")]
    FleetDoesNotFit,
    /// The request does not fit the current phase of the match, e.g. shooting after the
    /// match is over.
    #[error("not allowed in the current phase of the match")]
    WrongPhase,
}

impl From<CannotPlaceReason> for Rejection {
    fn from(reason: CannotPlaceReason) -> Self {
        match reason {
            CannotPlaceReason::InvalidPosition => Rejection::InvalidPosition,
            CannotPlaceReason::AlreadyOccupied => Rejection::AlreadyOccupied,
        }
    }
}

impl From<CannotShootReason> for Rejection {
    fn from(reason: CannotShootReason) -> Self {
        match reason {
            CannotShootReason::InvalidPosition => Rejection::InvalidPosition,
            CannotShootReason::AlreadyShot => Rejection::AlreadyShot,
        }
    }
}
