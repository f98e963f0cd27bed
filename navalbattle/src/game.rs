//! The match engine: sequences the placement phase of both players, then alternating
//! shots until one fleet is destroyed.
//!
//! [`Match`] can be driven one step at a time through [`Match::place_next`] and
//! [`Match::fire`], or run to completion against a [`Console`] with [`Match::run`].
use std::io;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{Coordinate, ShotOutcome},
    player::Player,
    ships::{FleetComposition, Orientation, Ship, ShipClass},
};

pub use self::{
    console::{BoardView, Console, CoordinatePrompt, Event},
    errors::Rejection,
};

mod console;
mod errors;

/// One of the two sides of a match. `First` places ships first and shoots first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the opponent of this seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// State of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The given seat is placing ships.
    Setup(Seat),
    /// The given seat holds the turn.
    Shooting(Seat),
    /// The given seat won.
    Finished(Seat),
}

/// What a successful shot did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotReport {
    /// Who fired.
    pub shooter: Seat,
    /// Where the shot landed.
    pub coord: Coordinate,
    /// Effect on the defender's board.
    pub outcome: ShotOutcome,
    /// Points the shooter earned with this shot.
    pub points: u32,
    /// Whether the turn passed to the other seat.
    pub turn_passed: bool,
}

/// Final result of a match.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchSummary {
    pub winner: Seat,
    pub name: String,
    pub score: u32,
}

/// A two-player match, owning both players for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    fleet: FleetComposition,
    phase: Phase,
}

impl Match {
    /// Start a match in the placement phase of the first player.
    pub fn new<S1: Into<String>, S2: Into<String>>(
        first: S1,
        second: S2,
        fleet: FleetComposition,
    ) -> Self {
        let players = [Player::new(first), Player::new(second)];
        info!(
            "new match: {} vs {}, {} ships each",
            players[0].name(),
            players[1].name(),
            fleet.total_ships()
        );
        Self {
            players,
            fleet,
            phase: Phase::Setup(Seat::First),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fleet(&self) -> &FleetComposition {
        &self.fleet
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The seat whose turn it is while shooting.
    pub fn active(&self) -> Option<Seat> {
        match self.phase {
            Phase::Shooting(seat) => Some(seat),
            _ => None,
        }
    }

    /// The winner, once the other player's fleet has been destroyed.
    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::Finished(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    /// Name and score of the winner, once there is one.
    pub fn summary(&self) -> Option<MatchSummary> {
        match self.phase {
            Phase::Finished(seat) => Some(self.summary_for(seat)),
            _ => None,
        }
    }

    fn summary_for(&self, winner: Seat) -> MatchSummary {
        let player = self.player(winner);
        MatchSummary {
            winner,
            name: player.name().to_owned(),
            score: player.score(),
        }
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Class of the next ship the player in setup has to place.
    pub fn next_ship(&self) -> Option<ShipClass> {
        match self.phase {
            Phase::Setup(seat) => self
                .fleet
                .nth_ship(self.player(seat).board().ships().len()),
            _ => None,
        }
    }

    /// Place the next pending ship of the player in setup. The orientation is ignored for
    /// single-cell ships. A rejected placement changes nothing and the same ship stays
    /// pending.
    pub fn place_next(
        &mut self,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Ship, Rejection> {
        let seat = match self.phase {
            Phase::Setup(seat) => seat,
            _ => return Err(Rejection::WrongPhase),
        };
        let class = self.next_ship().ok_or(Rejection::WrongPhase)?;
        let ship = Ship::new(class, anchor, orientation);
        self.player_mut(seat)
            .add_ship(ship)
            .map_err(|err| Rejection::from(err.reason()))?;
        debug!("{:?} placed {} at {}", seat, class, anchor);
        self.advance_setup(seat);
        Ok(ship)
    }

    /// Place the whole fleet of the player in setup at random. Only allowed before that
    /// player placed any ship. Fails with [`Rejection::FleetDoesNotFit`] if no layout was
    /// found, in which case the board stays empty.
    pub fn randomize_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Rejection> {
        let seat = match self.phase {
            Phase::Setup(seat) => seat,
            _ => return Err(Rejection::WrongPhase),
        };
        if !self.player(seat).board().ships().is_empty() {
            return Err(Rejection::WrongPhase);
        }
        let fleet = self.fleet.clone();
        if !self.player_mut(seat).place_fleet_randomly(rng, &fleet) {
            debug!("{:?} could not fit a random fleet", seat);
            return Err(Rejection::FleetDoesNotFit);
        }
        debug!("{:?} placed a random fleet", seat);
        self.advance_setup(seat);
        Ok(())
    }

    /// Move on once `seat` has placed the whole fleet.
    fn advance_setup(&mut self, seat: Seat) {
        if self.player(seat).board().ships().len() < self.fleet.total_ships() {
            return;
        }
        self.phase = match seat {
            Seat::First => Phase::Setup(Seat::Second),
            Seat::Second => {
                self.player_mut(Seat::First).swap_turn();
                Phase::Shooting(Seat::First)
            }
        };
        debug!("entering {:?}", self.phase);
    }

    /// Fire the active player's shot at the opponent's board.
    ///
    /// A miss passes the turn. A hit keeps it, unless it destroyed the last ship, in which
    /// case the shooter wins. Rejected shots consume nothing.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotReport, Rejection> {
        let shooter = self.active().ok_or(Rejection::WrongPhase)?;
        let defender = shooter.opponent();
        let outcome = self
            .player_mut(defender)
            .receive_shot(coord)
            .map_err(|err| Rejection::from(err.reason()))?;
        let before = self.player(shooter).score();
        let turn_passed = if outcome.is_hit() {
            self.player_mut(shooter).record_hit();
            if self.player(defender).is_defeated() {
                self.phase = Phase::Finished(shooter);
                info!("{} wins", self.player(shooter).name());
            }
            false
        } else {
            self.player_mut(shooter).record_miss();
            for player in self.players.iter_mut() {
                player.swap_turn();
            }
            self.phase = Phase::Shooting(defender);
            true
        };
        Ok(ShotReport {
            shooter,
            coord,
            outcome,
            points: self.player(shooter).score() - before,
            turn_passed,
        })
    }

    /// Play the match to the end, getting all input from and sending all output to the
    /// given console. Picks up from whatever phase the match is in.
    pub fn run<C, R>(&mut self, console: &mut C, rng: &mut R) -> io::Result<MatchSummary>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            match self.phase {
                Phase::Setup(seat) => self.run_setup(seat, console, rng)?,
                Phase::Shooting(seat) => self.run_turn(seat, console)?,
                Phase::Finished(winner) => {
                    console.report(Event::Finished {
                        winner: self.player(winner),
                    })?;
                    return Ok(self.summary_for(winner));
                }
            }
        }
    }

    /// Place every remaining ship of `seat`.
    fn run_setup<C, R>(&mut self, seat: Seat, console: &mut C, rng: &mut R) -> io::Result<()>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        console.report(Event::SetupStarted {
            player: self.player(seat),
        })?;
        if self.player(seat).board().ships().is_empty()
            && console.offer_random_fleet(self.player(seat))?
        {
            match self.randomize_fleet(rng) {
                Ok(()) => {
                    console.show_board(self.player(seat), BoardView::Reveal)?;
                    console.request_continue()?;
                }
                Err(reason) => console.report(Event::RandomFleetRejected {
                    player: self.player(seat),
                    reason,
                })?,
            }
        }
        while self.phase == Phase::Setup(seat) {
            let class = match self.next_ship() {
                Some(class) => class,
                None => break,
            };
            loop {
                let anchor = console.request_coordinate(CoordinatePrompt::Placement {
                    player: self.player(seat),
                    class,
                })?;
                let orientation = if class.needs_orientation() {
                    console.request_orientation(class)?
                } else {
                    Orientation::Horizontal
                };
                match self.place_next(anchor, orientation) {
                    Ok(_) => break,
                    Err(reason) => console.report(Event::PlacementRejected { class, reason })?,
                }
            }
            console.show_board(self.player(seat), BoardView::Reveal)?;
            console.request_continue()?;
        }
        console.report(Event::FleetComplete {
            player: self.player(seat),
        })
    }

    /// Let `seat` shoot until they miss or win.
    fn run_turn<C: Console + ?Sized>(&mut self, seat: Seat, console: &mut C) -> io::Result<()> {
        console.report(Event::TurnStarted {
            shooter: self.player(seat),
        })?;
        while self.phase == Phase::Shooting(seat) {
            let defender = self.player(seat.opponent());
            console.show_board(defender, BoardView::Hide)?;
            let coord = console.request_coordinate(CoordinatePrompt::Target {
                shooter: self.player(seat),
                defender,
            })?;
            match self.fire(coord) {
                Ok(report) => {
                    console.report(Event::ShotResolved {
                        shooter: self.player(seat),
                        defender: self.player(seat.opponent()),
                        report,
                    })?;
                    console.request_continue()?;
                }
                Err(reason) => console.report(Event::ShotRejected { coord, reason })?,
            }
        }
        Ok(())
    }
}
