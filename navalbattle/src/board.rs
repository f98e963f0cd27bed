//! Types that make up the game board.

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::ships::{Orientation, Ship, ShipClass};

use self::grid::Grid;
pub use self::{
    cell::{Cell, CellFlag},
    coordinate::Coordinate,
    dimensions::{Dimensions, BOARD_HEIGHT, BOARD_WIDTH},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
};

mod cell;
mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, but did not sink it.
    Hit(Ship),
    /// The shot sank the given ship, but the player has more ships left.
    Sunk(Ship),
    /// The shot sank the given ship, and all of the player's ships are now sunk.
    Defeated(Ship),
}

impl ShotOutcome {
    /// Returns true if the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Get the ship that was hit.
    pub fn ship(&self) -> Option<&Ship> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(ref ship)
            | ShotOutcome::Sunk(ref ship)
            | ShotOutcome::Defeated(ref ship) => Some(ship),
        }
    }
}

/// Cells a ship would claim if it were placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Footprint {
    /// Cells covered by the ship body.
    pub cells: Vec<Coordinate>,
    /// In-bounds cells touching the body, diagonals included.
    pub ring: Vec<Coordinate>,
    /// The ring cell nearest to the anchor.
    pub origin: Option<Coordinate>,
}

impl Footprint {
    /// Compute the footprint of `ship`, or `None` if part of it lies beyond the range of
    /// coordinates.
    fn of(ship: &Ship, dim: &Dimensions) -> Option<Self> {
        let cells: Vec<_> = ship.coords().collect();
        if cells.len() != ship.len() {
            return None;
        }
        let mut ring: Vec<Coordinate> = Vec::new();
        for &coord in &cells {
            for neighbor in dim.neighbors(coord) {
                if !cells.contains(&neighbor) && !ring.contains(&neighbor) {
                    ring.push(neighbor);
                }
            }
        }
        let anchor = ship.anchor();
        let origin = ring
            .iter()
            .copied()
            .min_by_key(|c| (c.distance_squared(anchor), c.y, c.x));
        Some(Self {
            cells,
            ring,
            origin,
        })
    }
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Ships in the order they were placed. Cells refer to ships by index in this list.
    ships: Vec<Ship>,

    /// Number of cells covered by placed ships.
    total_fleet_cells: usize,

    /// Number of occupied cells that have been shot.
    hit_cells: usize,
}

impl Board {
    /// Construct an empty 10x10 board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(Dimensions::default()),
            ships: Vec::new(),
            total_fleet_cells: 0,
            hit_cells: 0,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells of that row.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = &'a Cell>> {
        let grid = &self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| &grid[coord]))
    }

    /// The ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship covering the given coordinate, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.cell(coord)
            .and_then(Cell::ship_index)
            .and_then(|idx| self.ships.get(idx))
    }

    /// Check if the ship placed with the given index has been sunk.
    pub fn is_sunk(&self, ship: usize) -> bool {
        self.ships
            .get(ship)
            .map_or(false, |ship| ship.coords().all(|coord| self.grid[coord].shot()))
    }

    /// Sum of the sizes of all placed ships.
    pub fn total_fleet_cells(&self) -> usize {
        self.total_fleet_cells
    }

    /// Number of ship cells that have been shot.
    pub fn hit_cells(&self) -> usize {
        self.hit_cells
    }

    /// Returns true if at least one ship was placed and every ship cell has been shot.
    pub fn defeated(&self) -> bool {
        self.total_fleet_cells > 0 && self.hit_cells == self.total_fleet_cells
    }

    /// Check if the given ship could be placed, without placing it. On success returns
    /// the cells the ship would claim.
    pub fn check_placement(&self, ship: &Ship) -> Result<Footprint, CannotPlaceReason> {
        let footprint =
            Footprint::of(ship, self.dimensions()).ok_or(CannotPlaceReason::InvalidPosition)?;
        let mut cells = Vec::with_capacity(footprint.cells.len());
        for coord in &footprint.cells {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::InvalidPosition),
                Some(cell) => cells.push(cell),
            }
        }
        if cells.iter().all(|cell| cell.available()) {
            Ok(footprint)
        } else {
            Err(CannotPlaceReason::AlreadyOccupied)
        }
    }

    /// Attempts to place the ship. Returns `Err` with the ship and the reason placement
    /// failed, in which case the board is left untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        let footprint = match self.check_placement(&ship) {
            Ok(footprint) => footprint,
            Err(reason) => return Err(PlaceError::new(reason, ship)),
        };
        let index = self.ships.len();
        // Already ensured that every position is valid and not occupied.
        for coord in &footprint.cells {
            self.grid[coord].occupy(index);
        }
        for coord in &footprint.ring {
            self.grid[coord].mark(CellFlag::Buffer);
        }
        if let Some(origin) = footprint.origin {
            self.grid[origin].mark(CellFlag::BufferOrigin);
        }
        trace!("placed {} at {}", ship.class(), ship.anchor());
        self.total_fleet_cells += ship.len();
        self.ships.push(ship);
        Ok(())
    }

    /// Place a ship of the given class at a position chosen uniformly among every legal
    /// placement left on the board.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<Ship, PlaceError> {
        let orientations: &[Orientation] = if class.needs_orientation() {
            Orientation::ALL
        } else {
            &Orientation::ALL[..1]
        };
        let candidates: Vec<Ship> = self
            .dimensions()
            .iter_coordinates()
            .flatten()
            .flat_map(move |anchor| {
                orientations
                    .iter()
                    .map(move |&orientation| Ship::new(class, anchor, orientation))
            })
            .filter(|ship| self.check_placement(ship).is_ok())
            .collect();
        match candidates.choose(rng) {
            Some(&ship) => self.place_ship(ship).map(|()| ship),
            None => Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                Ship::new(class, Coordinate::new(0, 0), Orientation::Horizontal),
            )),
        }
    }

    /// Fire a shot at this board, returning a result indicating why the shot was aborted
    /// or the result of the shot.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let hit_ship = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::InvalidPosition, coord)),
            Some(cell) if cell.shot() => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
            Some(cell) => {
                cell.mark(CellFlag::Shot);
                cell.ship_index()
            }
        };
        trace!("shot at {}: {:?}", coord, hit_ship);
        Ok(match hit_ship {
            None => ShotOutcome::Miss,
            Some(index) => {
                self.hit_cells += 1;
                let ship = self.ships[index];
                if self.defeated() {
                    ShotOutcome::Defeated(ship)
                } else if self.is_sunk(index) {
                    ShotOutcome::Sunk(ship)
                } else {
                    ShotOutcome::Hit(ship)
                }
            }
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
