//! A participant in the match: a name, a board and the score kept while shooting.
use log::debug;
use rand::Rng;

use crate::{
    board::{Board, Coordinate, PlaceError, ShotError, ShotOutcome},
    ships::{FleetComposition, Ship},
};

/// Points awarded for a hit that follows another hit (or the first shot of the match).
pub const BASE_SCORE: u32 = 1000;

/// How many times random placement starts over from an empty board before giving up.
const RANDOM_FLEET_ATTEMPTS: usize = 64;

/// One of the two players, owning their board for the whole match.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    score: u32,
    /// Misses since the last hit.
    wrong_attempts: u32,
    turn: bool,
}

impl Player {
    /// Create a player with an empty board. The name cannot be changed later.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            score: 0,
            wrong_attempts: 0,
            turn: false,
        }
    }

    /// Get the name this player was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to this player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Points earned by this player's hits so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of misses since this player's last hit.
    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    /// Whether this player holds the right to the next shot.
    pub fn is_turn(&self) -> bool {
        self.turn
    }

    /// Cells covered by this player's fleet so far.
    pub fn fleet_cells(&self) -> usize {
        self.board.total_fleet_cells()
    }

    /// Cells of this player's fleet that the opponent has hit.
    pub fn hit_cells(&self) -> usize {
        self.board.hit_cells()
    }

    /// Returns true once every ship of this player has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.board.defeated()
    }

    /// Add a ship to this player's board.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        self.board.place_ship(ship)
    }

    /// Take a shot from the opponent. Scoring is up to the shooter.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        self.board.shoot(coord)
    }

    /// Credit a hit. A hit right after another hit is worth [`BASE_SCORE`]; after `k`
    /// misses in a row it is worth `BASE_SCORE / k`.
    pub fn record_hit(&mut self) {
        self.score += match self.wrong_attempts {
            0 => BASE_SCORE,
            k => BASE_SCORE / k,
        };
        self.wrong_attempts = 0;
    }

    /// Count a miss against the next hit's score.
    pub fn record_miss(&mut self) {
        self.wrong_attempts += 1;
    }

    /// Give up the turn if this player holds it, or take it otherwise.
    pub fn swap_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Place the whole fleet at random positions. Only possible while the board is still
    /// empty; returns false if the board already has ships or no layout could be found, in
    /// which case the board is unchanged.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &FleetComposition,
    ) -> bool {
        if !self.board.ships().is_empty() {
            return false;
        }
        for attempt in 0..RANDOM_FLEET_ATTEMPTS {
            let mut board = Board::new();
            if fleet
                .iter_ships()
                .all(|class| board.place_random(rng, class).is_ok())
            {
                debug!("random fleet for {} after {} restarts", self.name, attempt);
                self.board = board;
                return true;
            }
        }
        false
    }
}
