//! Types used for defining ships and their shapes.
use std::fmt;

use crate::board::Coordinate;

pub use self::fleet::FleetComposition;

mod fleet;

/// Size class of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShipClass {
    /// Submarine: length 1.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
    /// Cruiser: length 3.
    Cruiser,
    /// Battleship: length 4.
    Battleship,
}

impl ShipClass {
    /// Every class, largest first.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
        ShipClass::Submarine,
    ];

    /// Get the number of cells a ship of this class occupies.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Submarine => 1,
            ShipClass::Destroyer => 2,
            ShipClass::Cruiser => 3,
            ShipClass::Battleship => 4,
        }
    }

    /// Whether the player has to pick an orientation for ships of this class.
    pub fn needs_orientation(self) -> bool {
        self.len() > 1
    }

    /// Full lowercase name of the class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
            ShipClass::Cruiser => "cruiser",
            ShipClass::Battleship => "battleship",
        }
    }

    /// Two letter hull classification.
    pub fn abbrev(self) -> &'static str {
        match self {
            ShipClass::Submarine => "ss",
            ShipClass::Destroyer => "dd",
            ShipClass::Cruiser => "cl",
            ShipClass::Battleship => "bb",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Placement orientation of a ship longer than one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    /// Step from one cell of a ship to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A straight ship anchored at its top-left cell.
///
/// A ship is only a description of where it wants to be; it is the
/// [`Board`][crate::board::Board] that decides whether that position is legal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    class: ShipClass,
    anchor: Coordinate,
    /// Always `None` for ships of length 1.
    orientation: Option<Orientation>,
}

impl Ship {
    /// Build a ship of the given class. The orientation is ignored for single-cell ships.
    pub fn new(class: ShipClass, anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            class,
            anchor,
            orientation: if class.needs_orientation() {
                Some(orientation)
            } else {
                None
            },
        }
    }

    /// Build a single-cell ship.
    pub fn submarine(anchor: Coordinate) -> Self {
        Self {
            class: ShipClass::Submarine,
            anchor,
            orientation: None,
        }
    }

    /// Get the class of this ship.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Get the number of cells this ship covers.
    pub fn len(&self) -> usize {
        self.class.len()
    }

    /// Get the coordinate where this ship starts.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Get the orientation of this ship, `None` if it only covers one cell.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Get an iterator over the coordinates this ship covers, starting at the anchor.
    /// Cells that would lie beyond the range of `i32` are skipped; a ship like that never
    /// fits on a board.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.map_or((0, 0), Orientation::step);
        let anchor = self.anchor;
        (0..self.len() as i32).filter_map(move |i| anchor.offset(dx * i, dy * i))
    }
}
