//! The seam between the match engine and whatever talks to the humans playing it.
use std::io;

use crate::{
    board::Coordinate,
    game::{Rejection, ShotReport},
    player::Player,
    ships::{Orientation, ShipClass},
};

/// What a requested coordinate will be used for.
#[derive(Debug, Copy, Clone)]
pub enum CoordinatePrompt<'a> {
    /// Anchor of the next ship `player` has to place.
    Placement { player: &'a Player, class: ShipClass },
    /// Target of the next shot by `shooter` at `defender`'s board.
    Target {
        shooter: &'a Player,
        defender: &'a Player,
    },
}

/// How much of a board may be shown.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoardView {
    /// Everything, for the owner of the board.
    Reveal,
    /// Only shots and what they hit, for the opponent.
    Hide,
}

/// Things that happened in the match which the players should be told about.
#[derive(Debug, Copy, Clone)]
pub enum Event<'a> {
    /// `player` is about to place their fleet.
    SetupStarted { player: &'a Player },
    /// `player` has placed every ship.
    FleetComplete { player: &'a Player },
    /// `player` asked for a random fleet and did not get one; their ships are placed by
    /// hand instead.
    RandomFleetRejected {
        player: &'a Player,
        reason: Rejection,
    },
    /// A ship of `class` could not be placed where asked.
    PlacementRejected { class: ShipClass, reason: Rejection },
    /// `shooter` is about to take their turn.
    TurnStarted { shooter: &'a Player },
    /// The shot at `coord` was refused and may be retried.
    ShotRejected { coord: Coordinate, reason: Rejection },
    /// A shot landed on `defender`'s board.
    ShotResolved {
        shooter: &'a Player,
        defender: &'a Player,
        report: ShotReport,
    },
    /// The match is over.
    Finished { winner: &'a Player },
}

/// Input and output for a [`Match`][crate::game::Match] driven by
/// [`Match::run`][crate::game::Match::run].
///
/// Implementations only gather raw input; every domain check happens in the engine, which
/// asks again after any rejection. Errors returned from any method abort the run and are
/// handed back to its caller.
pub trait Console {
    /// Ask for a coordinate.
    fn request_coordinate(&mut self, prompt: CoordinatePrompt<'_>) -> io::Result<Coordinate>;

    /// Ask which way a ship of the given class should point. Only asked for classes longer
    /// than one cell.
    fn request_orientation(&mut self, class: ShipClass) -> io::Result<Orientation>;

    /// Wait until the player acknowledges what is on screen.
    fn request_continue(&mut self) -> io::Result<()>;

    /// Ask whether `player` wants their fleet placed for them.
    fn offer_random_fleet(&mut self, _player: &Player) -> io::Result<bool> {
        Ok(false)
    }

    /// Display `owner`'s board.
    fn show_board(&mut self, owner: &Player, view: BoardView) -> io::Result<()>;

    /// Tell the players something happened.
    fn report(&mut self, event: Event<'_>) -> io::Result<()>;
}
